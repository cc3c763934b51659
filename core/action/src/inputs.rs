//! Inputs declared by actions and values received when they are triggered.
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as Json;

use crate::errors::InputsMismatch;
use crate::errors::InvalidPropertyRef;
use crate::PropertyRef;

/// Component properties an action reads when triggered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredInputs {
    /// Values are passed to the action function positionally.
    List(Vec<PropertyRef>),

    /// Values are passed to the action function by name.
    Mapping(BTreeMap<String, PropertyRef>),
}

impl DeclaredInputs {
    /// Verify received inputs have the same shape as the declared inputs.
    pub fn check(&self, action: &str, inputs: &ActionInputs) -> Result<()> {
        let matches = match (self, inputs) {
            (DeclaredInputs::List(declared), ActionInputs::Positional(values)) => {
                declared.len() == values.len()
            }
            (DeclaredInputs::Mapping(declared), ActionInputs::Named(values)) => {
                declared.keys().eq(values.keys())
            }
            _ => false,
        };
        if matches {
            return Ok(());
        }

        let error = InputsMismatch {
            action: action.to_string(),
            expected: self.describe(),
            received: inputs.describe(),
        };
        Err(error.into())
    }

    /// Declare positional inputs from `<component_id>.<property>` strings.
    pub fn list<I, S>(references: I) -> Result<DeclaredInputs, InvalidPropertyRef>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let references = references
            .into_iter()
            .map(|reference| reference.as_ref().parse())
            .collect::<Result<_, _>>()?;
        Ok(DeclaredInputs::List(references))
    }

    /// Declare named inputs from `(name, "<component_id>.<property>")` pairs.
    pub fn mapping<I, K, S>(references: I) -> Result<DeclaredInputs, InvalidPropertyRef>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<str>,
    {
        let references = references
            .into_iter()
            .map(|(name, reference)| Ok((name.into(), reference.as_ref().parse()?)))
            .collect::<Result<_, InvalidPropertyRef>>()?;
        Ok(DeclaredInputs::Mapping(references))
    }

    fn describe(&self) -> String {
        match self {
            DeclaredInputs::List(declared) => format!("{} positional inputs", declared.len()),
            DeclaredInputs::Mapping(declared) => {
                let keys: BTreeSet<&String> = declared.keys().collect();
                format!("named inputs {:?}", keys)
            }
        }
    }
}

impl Default for DeclaredInputs {
    fn default() -> Self {
        DeclaredInputs::List(Vec::new())
    }
}

/// Values of the declared inputs received when an action is triggered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionInputs {
    /// Positional values for [`DeclaredInputs::List`] declarations.
    Positional(Vec<Json>),

    /// Named values for [`DeclaredInputs::Mapping`] declarations.
    Named(BTreeMap<String, Json>),
}

impl ActionInputs {
    fn describe(&self) -> String {
        match self {
            ActionInputs::Positional(values) => format!("{} positional inputs", values.len()),
            ActionInputs::Named(values) => {
                let keys: BTreeSet<&String> = values.keys().collect();
                format!("named inputs {:?}", keys)
            }
        }
    }
}

impl Default for ActionInputs {
    fn default() -> Self {
        ActionInputs::Positional(Vec::new())
    }
}
