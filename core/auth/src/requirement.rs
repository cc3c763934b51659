//! Group membership requirements attached to protected actions and content.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::UnknownCheckMode;

/// Session user attribute holding group membership when none is specified.
pub const DEFAULT_GROUPS_KEY: &str = "roles";

/// How the caller's groups are compared against the required groups.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// The caller must be a member of at least one required group.
    #[default]
    OneOf,

    /// The caller must be a member of every required group.
    AllOf,

    /// The caller must not be a member of any required group.
    NoneOf,
}

impl CheckMode {
    /// Configuration name of the check mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::OneOf => "one_of",
            CheckMode::AllOf => "all_of",
            CheckMode::NoneOf => "none_of",
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckMode {
    type Err = UnknownCheckMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "one_of" => Ok(CheckMode::OneOf),
            "all_of" => Ok(CheckMode::AllOf),
            "none_of" => Ok(CheckMode::NoneOf),
            other => Err(UnknownCheckMode::from(other)),
        }
    }
}

/// Groups a caller needs (or must not have) to access a protected action or content.
///
/// When no groups are required the requirement only checks the caller is authenticated
/// and the [`CheckMode`] is ignored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionRequirement {
    #[serde(default)]
    groups: BTreeSet<String>,

    #[serde(default = "PermissionRequirement::default_groups_key")]
    groups_key: String,

    #[serde(default)]
    groups_separator: Option<String>,

    #[serde(default)]
    check_mode: CheckMode,
}

impl PermissionRequirement {
    /// Require callers to be authenticated, regardless of their groups.
    pub fn authenticated() -> PermissionRequirement {
        PermissionRequirement::build().finish()
    }

    /// Begin building a [`PermissionRequirement`].
    pub fn build() -> PermissionRequirementBuilder {
        PermissionRequirementBuilder {
            groups: BTreeSet::new(),
            groups_key: Self::default_groups_key(),
            groups_separator: None,
            check_mode: CheckMode::default(),
        }
    }

    /// How the caller's groups are compared to the required groups.
    pub fn check_mode(&self) -> CheckMode {
        self.check_mode
    }

    /// Groups the requirement is checked against.
    pub fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Session user attribute holding the caller's groups.
    pub fn groups_key(&self) -> &str {
        &self.groups_key
    }

    /// Separator used to split groups stored in the session as a single string.
    pub fn groups_separator(&self) -> Option<&str> {
        self.groups_separator.as_deref()
    }

    fn default_groups_key() -> String {
        DEFAULT_GROUPS_KEY.to_string()
    }
}

impl Default for PermissionRequirement {
    fn default() -> Self {
        PermissionRequirement::authenticated()
    }
}

/// Incrementally build a [`PermissionRequirement`].
#[derive(Clone, Debug)]
pub struct PermissionRequirementBuilder {
    groups: BTreeSet<String>,
    groups_key: String,
    groups_separator: Option<String>,
    check_mode: CheckMode,
}

impl PermissionRequirementBuilder {
    /// Set how the caller's groups are compared to the required groups.
    pub fn check_mode(mut self, mode: CheckMode) -> Self {
        self.check_mode = mode;
        self
    }

    /// Complete the build process.
    pub fn finish(self) -> PermissionRequirement {
        PermissionRequirement {
            groups: self.groups,
            groups_key: self.groups_key,
            groups_separator: self.groups_separator,
            check_mode: self.check_mode,
        }
    }

    /// Add a group to the requirement.
    pub fn group<S: Into<String>>(mut self, group: S) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Add several groups to the requirement.
    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Set the session user attribute holding the caller's groups.
    pub fn groups_key<S: Into<String>>(mut self, key: S) -> Self {
        self.groups_key = key.into();
        self
    }

    /// Split groups stored in the session as a single string with this separator.
    pub fn groups_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.groups_separator = Some(separator.into());
        self
    }
}
