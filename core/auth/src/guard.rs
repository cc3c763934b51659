//! Decide if a caller can access protected actions or content.
use std::fmt;

use crate::CheckMode;
use crate::PermissionRequirement;
use crate::Session;

/// Outcome of checking a [`Session`] against a [`PermissionRequirement`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// The caller can proceed.
    Allowed,

    /// The caller is not signed in.
    Unauthenticated,

    /// The caller is signed in but their groups do not satisfy the requirement.
    Forbidden,
}

impl Verdict {
    /// Label of the verdict for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allowed => "allowed",
            Verdict::Unauthenticated => "unauthenticated",
            Verdict::Forbidden => "forbidden",
        }
    }

    /// Check if the verdict grants access.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check the caller's [`Session`] against a [`PermissionRequirement`].
///
/// - Callers that are not authenticated are always [`Verdict::Unauthenticated`].
/// - Requirements without groups allow any authenticated caller.
/// - Otherwise the caller's groups are compared to the required groups according to the
///   requirement's [`CheckMode`] and a failed check is [`Verdict::Forbidden`].
pub fn decide(session: &Session, requirement: &PermissionRequirement) -> Verdict {
    if !session.authenticated {
        return Verdict::Unauthenticated;
    }

    let required = requirement.groups();
    if required.is_empty() {
        return Verdict::Allowed;
    }

    let membership = session.membership(requirement.groups_key(), requirement.groups_separator());
    let allowed = match requirement.check_mode() {
        CheckMode::OneOf => !membership.is_disjoint(required),
        CheckMode::AllOf => required.is_subset(&membership),
        CheckMode::NoneOf => membership.is_disjoint(required),
    };
    if allowed {
        Verdict::Allowed
    } else {
        Verdict::Forbidden
    }
}
