//! ActixWeb Middleware to derive a [`Context`] for each request.
use std::future::Ready;

use actix_web::dev::forward_ready;
use actix_web::dev::Service;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::dev::Transform;
use actix_web::web::Data;
use actix_web::Error;
use actix_web::HttpMessage;

use dashgate_auth::Session;

use super::Context;

/// Options for the per-request [`Context`] derivation.
///
/// Attach an instance as [`Data`] to the application to change the defaults.
#[derive(Clone, Debug)]
pub struct ContextConfig {
    add_trace_id: bool,
    log_authenticated: bool,
}

impl ContextConfig {
    /// Enable or disable adding the current trace ID to logs (if a trace ID is available).
    pub fn add_trace_id(mut self, add: bool) -> Self {
        self.add_trace_id = add;
        self
    }

    /// Enable or disable recording if the caller is signed in on request logs.
    pub fn log_authenticated(mut self, log: bool) -> Self {
        self.log_authenticated = log;
        self
    }

    /// Initialise a default configuration.
    pub fn new() -> Self {
        ContextConfig::default()
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            add_trace_id: true,
            log_authenticated: true,
        }
    }
}

/// Wrap an [`App`](actix_web::App) to give each request its own [`Context`].
///
/// The caller's [`Session`] is read from the request extensions, where the web session
/// layer stores it. Requests without a session are handled for anonymous callers.
pub struct ContextMiddleware {
    root: Context,
}

impl ContextMiddleware {
    /// Initialise a [`ContextMiddleware`] with the [`Context`] requests derive from.
    ///
    /// A root context attached to the application as [`Data`] takes precedence.
    pub fn new(root: Context) -> Self {
        Self { root }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ContextService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(ContextService {
            root: self.root.clone(),
            service,
        }))
    }
}

/// Service created by [`ContextMiddleware`] for each worker.
pub struct ContextService<S> {
    root: Context,
    service: S,
}

impl<S, B> Service<ServiceRequest> for ContextService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let context = request_context(&self.root, &request);
        request.extensions_mut().insert(context);
        self.service.call(request)
    }
}

/// Derive the [`Context`] to handle a request with.
fn request_context(fallback: &Context, request: &ServiceRequest) -> Context {
    let root = request.app_data::<Data<Context>>();
    let root = root.map(|root| root.get_ref()).unwrap_or(fallback);
    let config = request
        .app_data::<Data<ContextConfig>>()
        .map(|config| config.get_ref().clone())
        .unwrap_or_default();

    let session = request
        .extensions()
        .get::<Session>()
        .cloned()
        .unwrap_or_else(Session::anonymous);

    let mut builder = root.derive();
    if config.add_trace_id {
        builder = builder.log_trace();
    }
    if config.log_authenticated {
        builder = builder.log_values(slog::o!("authenticated" => session.authenticated));
    }
    builder.session(session).build()
}
