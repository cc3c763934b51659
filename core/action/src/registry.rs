//! Collection of protected actions declared by a dashboard.
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use crate::errors::ActionNotFound;
use crate::ProtectedAction;

/// Collection of [`ProtectedAction`]s known to a dashboard, indexed by ID.
#[derive(Clone, Debug)]
pub struct ActionRegistry {
    entries: Arc<HashMap<String, ProtectedAction>>,
}

impl ActionRegistry {
    /// Begin building an empty [`ActionRegistry`] instance.
    pub fn build() -> ActionRegistryBuilder {
        ActionRegistryBuilder::default()
    }

    /// Iterate over the IDs of all registered actions.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Lookup the action with the given `id`.
    pub fn lookup(&self, id: &str) -> Result<&ProtectedAction> {
        self.entries
            .get(id)
            .ok_or(ActionNotFound::from(id))
            .map_err(anyhow::Error::from)
    }
}

/// Incrementally build [`ActionRegistry`]s.
#[derive(Debug, Default)]
pub struct ActionRegistryBuilder {
    entries: HashMap<String, ProtectedAction>,
}

impl ActionRegistryBuilder {
    /// Complete building the registry instance.
    pub fn finish(self) -> ActionRegistry {
        ActionRegistry {
            entries: Arc::new(self.entries),
        }
    }

    /// Register a new protected action.
    ///
    /// # Panics
    ///
    /// This method panics if the action ID is already registered.
    pub fn register(&mut self, action: ProtectedAction) -> &mut Self {
        if self.entries.contains_key(action.id()) {
            panic!("action {} cannot be registered more then once", action.id());
        }

        let id = action.id().to_string();
        self.entries.insert(id, action);
        self
    }
}
