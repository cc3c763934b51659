//! Read-only view of the caller's identity as recorded by the web session layer.
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value as Json;

/// Identity information attached to the current caller.
///
/// Sessions are created by the external login flow and destroyed on logout or expiry.
/// This crate only ever reads them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The caller completed a login flow and the session has not expired.
    pub authenticated: bool,

    /// User attributes recorded at login (email, roles, groups, ...).
    #[serde(default)]
    pub user: Map<String, Json>,
}

impl Session {
    /// Session for a caller that never signed in.
    pub fn anonymous() -> Session {
        Session::default()
    }

    /// Session for a signed in user with the given attributes.
    pub fn user(user: Map<String, Json>) -> Session {
        Session {
            authenticated: true,
            user,
        }
    }

    /// Look up a user attribute by name.
    pub fn field(&self, key: &str) -> Option<&Json> {
        self.user.get(key)
    }

    /// Extract the set of groups the user is a member of.
    ///
    /// Groups stored under `key` can be:
    ///
    /// - A list of strings: non-string items are ignored.
    /// - A single string: split by `separator` when given, otherwise one group.
    ///
    /// Missing attributes and any other value result in an empty set.
    pub fn membership(&self, key: &str, separator: Option<&str>) -> BTreeSet<String> {
        match self.field(key) {
            Some(Json::Array(items)) => items
                .iter()
                .filter_map(Json::as_str)
                .map(String::from)
                .collect(),
            Some(Json::String(groups)) => match separator {
                Some(separator) => groups.split(separator).map(String::from).collect(),
                None => BTreeSet::from([groups.clone()]),
            },
            _ => BTreeSet::new(),
        }
    }
}
