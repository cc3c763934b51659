//! Data object storing the dashboard's access configuration.
use std::collections::BTreeMap;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use dashgate_auth::PermissionRequirement;
use dashgate_auth::MISSING_PERMISSION_MODAL_ID;
use dashgate_auth::UNAUTHENTICATED_MODAL_ID;

/// Access configuration for a dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conf {
    /// Modals opened when callers are denied access to actions.
    #[serde(default)]
    pub modals: ModalsConf,

    /// Named permission requirements actions and content can reference.
    #[serde(default)]
    pub policies: BTreeMap<String, PermissionRequirement>,
}

impl Conf {
    /// Lookup a named permission policy.
    pub fn policy(&self, name: &str) -> Result<&PermissionRequirement> {
        self.policies
            .get(name)
            .ok_or_else(|| PolicyNotFound::from(name).into())
    }
}

/// IDs of the modals opened when callers are denied access.
///
/// Set an ID to `null` to disable the matching modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalsConf {
    /// Modal opened for callers that are not signed in.
    #[serde(default = "ModalsConf::default_unauthenticated")]
    pub unauthenticated: Option<String>,

    /// Modal opened for callers missing the required groups.
    #[serde(default = "ModalsConf::default_missing_permission")]
    pub missing_permission: Option<String>,
}

impl ModalsConf {
    fn default_missing_permission() -> Option<String> {
        Some(MISSING_PERMISSION_MODAL_ID.to_string())
    }

    fn default_unauthenticated() -> Option<String> {
        Some(UNAUTHENTICATED_MODAL_ID.to_string())
    }
}

impl Default for ModalsConf {
    fn default() -> Self {
        ModalsConf {
            unauthenticated: Self::default_unauthenticated(),
            missing_permission: Self::default_missing_permission(),
        }
    }
}

/// No permission policy is configured with the given name.
#[derive(Debug, thiserror::Error)]
#[error("permission policy '{name}' not found")]
pub struct PolicyNotFound {
    /// Name of the policy being looked up.
    pub name: String,
}

impl From<&str> for PolicyNotFound {
    fn from(value: &str) -> Self {
        PolicyNotFound {
            name: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use dashgate_auth::MISSING_PERMISSION_MODAL_ID;
    use dashgate_auth::UNAUTHENTICATED_MODAL_ID;

    use super::Conf;
    use super::PolicyNotFound;

    #[test]
    fn defaults() {
        let conf: Conf = serde_yaml::from_str("{}").unwrap();
        assert_eq!(conf, Conf::default());
        assert_eq!(conf.modals.unauthenticated.as_deref(), Some(UNAUTHENTICATED_MODAL_ID));
        assert_eq!(
            conf.modals.missing_permission.as_deref(),
            Some(MISSING_PERMISSION_MODAL_ID),
        );
        assert!(conf.policies.is_empty());
    }

    #[test]
    fn policy_not_found() {
        let conf = Conf::default();
        let error = conf.policy("admins").unwrap_err();
        assert!(error.is::<PolicyNotFound>());
    }

    #[test]
    fn policy_rejects_unknown_fields() {
        let conf = "policies:\n  admins:\n    group: admin\n";
        assert!(serde_yaml::from_str::<Conf>(conf).is_err());
    }
}
