//! Errors related to protected action declaration and dispatch.
//!
//! All errors in this module are programming or configuration errors:
//! they are reported to the caller of [`ProtectedAction::dispatch`] and never retried.
//! Access denials are not errors.
//!
//! [`ProtectedAction::dispatch`]: crate::ProtectedAction::dispatch
use std::collections::BTreeSet;

/// No action is registered with the given ID.
#[derive(Debug, thiserror::Error)]
#[error("action '{id}' not found")]
pub struct ActionNotFound {
    /// ID of the action being looked up.
    pub id: String,
}

impl From<&str> for ActionNotFound {
    fn from(value: &str) -> Self {
        ActionNotFound {
            id: value.to_string(),
        }
    }
}

/// A denial slot uses the same key as one of the action's declared outputs.
#[derive(Debug, thiserror::Error)]
#[error("denial slot '{key}' collides with a declared output of the same name")]
pub struct DuplicateOutputKey {
    /// The key used by both a declared output and a denial slot.
    pub key: String,
}

/// The same component property is bound to more than one output slot.
#[derive(Debug, thiserror::Error)]
#[error("component property '{reference}' is bound to more than one output slot")]
pub struct DuplicateOutputRef {
    /// The property reference bound more than once.
    pub reference: String,
}

/// The inputs received by the action do not match the declared inputs.
#[derive(Debug, thiserror::Error)]
#[error("inputs to action '{action}' do not match its declaration: expected {expected}, received {received}")]
pub struct InputsMismatch {
    /// ID of the action receiving the inputs.
    pub action: String,

    /// Description of the declared inputs.
    pub expected: String,

    /// Description of the received inputs.
    pub received: String,
}

/// A component property reference is not in the `<component_id>.<property>` format.
#[derive(Debug, thiserror::Error)]
#[error("invalid property reference '{reference}', expected '<component_id>.<property>'")]
pub struct InvalidPropertyRef {
    /// The rejected reference.
    pub reference: String,
}

impl From<&str> for InvalidPropertyRef {
    fn from(value: &str) -> Self {
        InvalidPropertyRef {
            reference: value.to_string(),
        }
    }
}

/// The keys returned by an action function differ from its declared outputs.
#[derive(Debug, thiserror::Error)]
#[error(
    "keys of action '{action}' returned value {returned:?} do not match the action's defined outputs {declared:?}"
)]
pub struct MappingKeysMismatch {
    /// ID of the action that returned the value.
    pub action: String,

    /// Keys of the declared outputs.
    pub declared: BTreeSet<String>,

    /// Keys of the returned value.
    pub returned: BTreeSet<String>,
}

/// The action function returned a value but the action has no declared outputs.
#[derive(Debug, thiserror::Error)]
#[error("action '{id}' function has returned a value but the action has no defined outputs")]
pub struct ReturnedValueWithoutOutputs {
    /// ID of the action that returned the value.
    pub id: String,
}

impl From<&str> for ReturnedValueWithoutOutputs {
    fn from(value: &str) -> Self {
        ReturnedValueWithoutOutputs {
            id: value.to_string(),
        }
    }
}

/// The number of values returned by an action function differs from its declared outputs.
#[derive(Debug, thiserror::Error)]
#[error(
    "number of action '{action}' returned elements {returned} does not match the number of action's defined outputs {declared}"
)]
pub struct ReturnLengthMismatch {
    /// ID of the action that returned the value.
    pub action: String,

    /// Number of declared outputs.
    pub declared: usize,

    /// Number of returned values.
    pub returned: usize,
}

/// The action function did not return a list but the action's outputs are a list.
#[derive(Debug, thiserror::Error)]
#[error("action '{id}' function has not returned a list but the action's defined outputs are a list")]
pub struct ReturnNotList {
    /// ID of the action that returned the value.
    pub id: String,
}

impl From<&str> for ReturnNotList {
    fn from(value: &str) -> Self {
        ReturnNotList {
            id: value.to_string(),
        }
    }
}

/// The action function did not return a mapping but the action's outputs are a mapping.
#[derive(Debug, thiserror::Error)]
#[error(
    "action '{id}' function has not returned a mapping but the action's defined outputs are a mapping"
)]
pub struct ReturnNotMapping {
    /// ID of the action that returned the value.
    pub id: String,
}

impl From<&str> for ReturnNotMapping {
    fn from(value: &str) -> Self {
        ReturnNotMapping {
            id: value.to_string(),
        }
    }
}

/// The action function did not return a single value but the action has exactly one output.
#[derive(Debug, thiserror::Error)]
#[error("action '{id}' function has not returned a single value but the action has one defined output")]
pub struct ReturnNotScalar {
    /// ID of the action that returned the value.
    pub id: String,
}

impl From<&str> for ReturnNotScalar {
    fn from(value: &str) -> Self {
        ReturnNotScalar {
            id: value.to_string(),
        }
    }
}
