//! HTTP binding for protected dashboard actions.
//!
//! The reactive layer of a dashboard triggers actions by posting the values of their
//! declared inputs and applies the returned property updates to its components.
//! Slots left unchanged by an action are omitted from the response.
use actix_web::web::ServiceConfig;

mod dispatch;
mod error;

pub use self::dispatch::DispatchRequest;
pub use self::dispatch::DispatchResponse;
pub use self::error::Error;

/// Configure an HTTP Server with the action dispatch endpoint.
///
/// The [`ActionRegistry`](dashgate_action::ActionRegistry) to dispatch from must be
/// attached to the application as [`Data`](actix_web::web::Data).
pub fn configure(config: &mut ServiceConfig) {
    config.service(self::dispatch::dispatch);
}

#[cfg(test)]
mod tests;
