//! Dispatch dashboard actions on behalf of callers that may not be allowed to run them.
//!
//! A [`ProtectedAction`] wraps an [`ActionFunction`] with a [`PermissionRequirement`].
//! Every time the action is triggered the caller's session is checked and:
//!
//! - Allowed callers run the function and its return value is checked against the
//!   declared outputs.
//! - Denied callers do not run the function. Instead every declared output is left
//!   unchanged and the optional denial slots (the `is_open` property of the
//!   "unauthenticated" and "missing permission" modals) are flipped.
//!
//! Either way the result has the exact arity and shape computed when the action was
//! declared so the reactive layer can bind to it uniformly.
//!
//! [`PermissionRequirement`]: dashgate_auth::PermissionRequirement
mod action;
mod function;
mod inputs;
mod outputs;
mod refs;
mod registry;
mod slots;

pub mod errors;
pub mod metrics;


pub use self::action::ActionDeclaration;
pub use self::action::ProtectedAction;
pub use self::function::ActionFunction;
pub use self::inputs::ActionInputs;
pub use self::inputs::DeclaredInputs;
pub use self::outputs::ActionOutputs;
pub use self::outputs::ActionReturn;
pub use self::outputs::DeclaredOutputs;
pub use self::outputs::OutputValue;
pub use self::refs::PropertyRef;
pub use self::refs::MODAL_OPEN_PROPERTY;
pub use self::registry::ActionRegistry;
pub use self::registry::ActionRegistryBuilder;
pub use self::slots::OutputShape;
pub use self::slots::OutputSlots;
