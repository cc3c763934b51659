//! Errors building permission requirements.

/// The group membership check mode is not one of the supported modes.
#[derive(Debug, thiserror::Error)]
#[error("unknown group check mode '{mode}', expected one of 'one_of', 'all_of' or 'none_of'")]
pub struct UnknownCheckMode {
    /// The rejected check mode name.
    pub mode: String,
}

impl From<&str> for UnknownCheckMode {
    fn from(value: &str) -> Self {
        UnknownCheckMode {
            mode: value.to_string(),
        }
    }
}
