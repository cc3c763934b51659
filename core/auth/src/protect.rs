//! Protect content such as figures or page layouts with alternative content for denied callers.
use std::fmt;
use std::sync::Arc;

use crate::decide;
use crate::PermissionRequirement;
use crate::Session;
use crate::Verdict;

/// Content returned in place of protected content when access is denied.
pub enum Fallback<T> {
    /// Return a clone of a fixed value, such as a "no permission" figure.
    Value(T),

    /// Produce the value on demand, such as building a "page not found" layout.
    With(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Fallback<T> {
    /// Produce fallback content on demand with the given function.
    pub fn with<F>(producer: F) -> Fallback<T>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Fallback::With(Arc::new(producer))
    }
}

impl<T: Clone> Fallback<T> {
    /// Return the fallback content.
    pub fn produce(&self) -> T {
        match self {
            Fallback::Value(value) => value.clone(),
            Fallback::With(producer) => producer(),
        }
    }
}

impl<T: Clone> Clone for Fallback<T> {
    fn clone(&self) -> Self {
        match self {
            Fallback::Value(value) => Fallback::Value(value.clone()),
            Fallback::With(producer) => Fallback::With(Arc::clone(producer)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::With(_) => f.write_str("With(<producer>)"),
        }
    }
}

/// Result of evaluating access to [`Protected`] content.
#[derive(Debug, PartialEq)]
pub enum Access<T> {
    /// The caller can access the protected content.
    Granted,

    /// The caller was denied access and should receive the fallback content, if any.
    Denied {
        /// Content to return instead of the protected content.
        fallback: Option<T>,

        /// Reason access was denied.
        verdict: Verdict,
    },
}

/// Guard content behind a [`PermissionRequirement`] with separate fallbacks for each denial.
#[derive(Clone, Debug)]
pub struct Protected<T> {
    missing_permissions: Option<Fallback<T>>,
    requirement: PermissionRequirement,
    unauthenticated: Option<Fallback<T>>,
}

impl<T: Clone> Protected<T> {
    /// Protect content with a requirement and no fallback content.
    pub fn new(requirement: PermissionRequirement) -> Protected<T> {
        Protected {
            missing_permissions: None,
            requirement,
            unauthenticated: None,
        }
    }

    /// Evaluate access and run `protected` only if the caller is allowed.
    ///
    /// Denied callers receive the matching fallback content or `None` when no fallback is set.
    pub fn call<F>(&self, session: &Session, protected: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        match self.evaluate(session) {
            Access::Granted => Some(protected()),
            Access::Denied { fallback, .. } => fallback,
        }
    }

    /// Check the session against the requirement and select the fallback content for denials.
    pub fn evaluate(&self, session: &Session) -> Access<T> {
        let verdict = decide(session, &self.requirement);
        let fallback = match verdict {
            Verdict::Allowed => return Access::Granted,
            Verdict::Unauthenticated => self.unauthenticated.as_ref(),
            Verdict::Forbidden => self.missing_permissions.as_ref(),
        };
        let fallback = fallback.map(Fallback::produce);
        Access::Denied { fallback, verdict }
    }

    /// Set the content returned to signed in callers missing required groups.
    pub fn missing_permissions(mut self, fallback: Fallback<T>) -> Self {
        self.missing_permissions = Some(fallback);
        self
    }

    /// Requirement callers are checked against.
    pub fn requirement(&self) -> &PermissionRequirement {
        &self.requirement
    }

    /// Set the content returned to callers that are not signed in.
    pub fn unauthenticated(mut self, fallback: Fallback<T>) -> Self {
        self.unauthenticated = Some(fallback);
        self
    }
}
