//! Authentication state and group based authorisation for dashboard actions.
//!
//! Access checks ask two questions about a caller:
//!
//! - Is the caller signed in? This is recorded in their [`Session`].
//! - Do the caller's groups satisfy the [`PermissionRequirement`]?
//!
//! Both are answered together by [`decide`], which returns a three-way
//! [`Verdict`] so callers can give different feedback to anonymous users and to signed in
//! users missing the required groups.
//!
//! ## Decisions are never cached
//!
//! A [`Verdict`] is computed from the [`Session`] attached to each invocation and is never
//! stored: sessions change on login, logout and expiry and [`decide`] is cheap to recompute.
pub mod errors;
mod guard;
mod protect;
mod requirement;
mod session;

pub use self::guard::decide;
pub use self::guard::Verdict;
pub use self::protect::Access;
pub use self::protect::Fallback;
pub use self::protect::Protected;
pub use self::requirement::CheckMode;
pub use self::requirement::PermissionRequirement;
pub use self::requirement::PermissionRequirementBuilder;
pub use self::requirement::DEFAULT_GROUPS_KEY;
pub use self::session::Session;

/// ID of the dashboard wide modal shown to callers that are not signed in.
pub const UNAUTHENTICATED_MODAL_ID: &str = "unauthenticated-modal";

/// ID of the dashboard wide modal shown to signed in callers missing required groups.
pub const MISSING_PERMISSION_MODAL_ID: &str = "missing-permission-modal";
