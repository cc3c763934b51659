//! Convert action dispatch errors into HTTP responses.
use actix_web::http::StatusCode;

use dashgate_action::errors::ActionNotFound;
use dashgate_action::errors::InputsMismatch;

pub use replisdk::utils::actix::error::Error;

/// Wrap a dispatch error with the HTTP status matching its cause.
///
/// Unknown actions are `404 Not Found` and inputs that do not match the action declaration
/// are `400 Bad Request`. Anything else is an internal server error.
pub fn dispatch_error(error: anyhow::Error) -> Error {
    if error.is::<ActionNotFound>() {
        return Error::with_status(StatusCode::NOT_FOUND, error);
    }
    if error.is::<InputsMismatch>() {
        return Error::with_status(StatusCode::BAD_REQUEST, error);
    }
    Error::from(error)
}
