//! Invocation scoped values carried through dashboard request handling.
//!
//! Every dashboard action invocation is handled with its own [`Context`], which gives access to:
//!
//! - The caller's [`Session`], as provided by the web session layer.
//! - A [`Logger`] decorated with invocation attributes (trace ID, action ID, ...).
//!
//! Contexts are immutable: narrower scopes, such as a single action dispatch,
//! derive a new [`Context`] from their parent with extra log attributes or a different session.
use std::future::Ready;

use actix_web::dev::Payload;
use actix_web::Error;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use opentelemetry_api::trace::TraceContextExt;
use opentelemetry_api::trace::TraceId;
use opentelemetry_api::Context as OtelContext;
use slog::Logger;
use slog::OwnedKV;
use slog::SendSyncRefUnwindSafeKV;

use dashgate_auth::Session;

#[cfg(any(test, feature = "test-fixture"))]
mod capture;
mod middleware;

#[cfg(any(test, feature = "test-fixture"))]
pub use self::capture::LogCapture;
pub use self::middleware::ContextConfig;
pub use self::middleware::ContextMiddleware;

/// Values scoped to a single dashboard operation, such as an action dispatch.
///
/// Refer to the [crate level docs](crate) for details.
#[derive(Clone, Debug)]
pub struct Context {
    /// Logger decorated with the attributes of the operation.
    pub logger: Logger,

    /// Session of the caller the current operation is performed for.
    ///
    /// Root contexts carry an anonymous session.
    pub session: Session,
}

impl Context {
    /// Start from a copy of the current context to build a narrower one.
    pub fn derive(&self) -> ContextBuilder {
        ContextBuilder {
            context: self.clone(),
        }
    }

    /// Build a narrower context in one step, the callback configures the builder.
    pub fn derive_with<F>(&self, callback: F) -> Context
    where
        F: FnOnce(ContextBuilder) -> ContextBuilder,
    {
        callback(self.derive()).build()
    }

    /// Start building a process wide context for anonymous callers.
    pub fn root(logger: Logger) -> ContextBuilder {
        ContextBuilder {
            context: Context {
                logger,
                session: Session::anonymous(),
            },
        }
    }
}

/// Extract the [`Context`] attached to requests by the [`ContextMiddleware`].
///
/// Requests handled without the middleware fail with an internal server error.
impl FromRequest for Context {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(request: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = request.extensions().get::<Context>().cloned().ok_or_else(|| {
            actix_web::error::ErrorInternalServerError("request has no context attached")
        });
        std::future::ready(context)
    }
}

/// Incrementally change a [`Context`] before it is used.
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Complete the changes and return the new [`Context`].
    pub fn build(self) -> Context {
        self.context
    }

    /// Attach the ID of the active OpenTelemetry trace to logs, if there is one.
    pub fn log_trace(self) -> Self {
        match current_trace_id() {
            Some(trace_id) => self.log_values(slog::o!("trace_id" => trace_id)),
            None => self,
        }
    }

    /// Attach extra key/value pairs to all events logged with the new context.
    pub fn log_values<T>(mut self, entries: OwnedKV<T>) -> Self
    where
        T: SendSyncRefUnwindSafeKV + 'static,
    {
        self.context.logger = self.context.logger.new(entries);
        self
    }

    /// Replace the caller [`Session`] of the new context.
    pub fn session(mut self, session: Session) -> Self {
        self.context.session = session;
        self
    }
}

fn current_trace_id() -> Option<String> {
    let otel = OtelContext::current();
    let trace_id = otel.span().span_context().trace_id();
    (trace_id != TraceId::INVALID).then(|| trace_id.to_string())
}

#[cfg(any(test, feature = "test-fixture"))]
impl Context {
    /// Anonymous context that discards all logs.
    pub fn fixture() -> Context {
        Context::root(Logger::root(slog::Discard, slog::o!())).build()
    }
}
