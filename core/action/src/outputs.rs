//! Outputs declared by actions and the values produced for them.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as Json;

use crate::errors::InvalidPropertyRef;
use crate::PropertyRef;

/// Component properties an action updates when triggered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredOutputs {
    /// The action function returns values positionally.
    List(Vec<PropertyRef>),

    /// The action function returns values by name.
    Mapping(BTreeMap<String, PropertyRef>),
}

impl DeclaredOutputs {
    /// Check if the action declares no outputs at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of declared outputs.
    pub fn len(&self) -> usize {
        match self {
            DeclaredOutputs::List(outputs) => outputs.len(),
            DeclaredOutputs::Mapping(outputs) => outputs.len(),
        }
    }

    /// Declare positional outputs from `<component_id>.<property>` strings.
    pub fn list<I, S>(references: I) -> Result<DeclaredOutputs, InvalidPropertyRef>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let references = references
            .into_iter()
            .map(|reference| reference.as_ref().parse())
            .collect::<Result<_, _>>()?;
        Ok(DeclaredOutputs::List(references))
    }

    /// Declare named outputs from `(name, "<component_id>.<property>")` pairs.
    pub fn mapping<I, K, S>(references: I) -> Result<DeclaredOutputs, InvalidPropertyRef>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<str>,
    {
        let references = references
            .into_iter()
            .map(|(name, reference)| Ok((name.into(), reference.as_ref().parse()?)))
            .collect::<Result<_, InvalidPropertyRef>>()?;
        Ok(DeclaredOutputs::Mapping(references))
    }
}

impl Default for DeclaredOutputs {
    fn default() -> Self {
        DeclaredOutputs::List(Vec::new())
    }
}

/// Value returned by an action function, before it is checked against the declared outputs.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionReturn {
    /// Nothing was returned, for actions without outputs.
    Nothing,

    /// A single value, for actions with exactly one positional output.
    Value(Json),

    /// One value per positional output, in declaration order.
    List(Vec<Json>),

    /// One value per named output.
    Mapping(BTreeMap<String, Json>),
}

/// Value assigned to a single output slot.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputValue {
    /// Leave the bound property as it is.
    ///
    /// This is not the same as `Value(Json::Null)`, which sets the property to null.
    Unchanged,

    /// Set the bound property to the given value.
    Value(Json),
}

impl OutputValue {
    /// Check if the slot leaves its bound property as it is.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, OutputValue::Unchanged)
    }
}

impl From<bool> for OutputValue {
    fn from(value: bool) -> Self {
        OutputValue::Value(Json::Bool(value))
    }
}

impl From<Json> for OutputValue {
    fn from(value: Json) -> Self {
        OutputValue::Value(value)
    }
}

/// Values for all output slots of an action, denial slots included.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutputs {
    /// The action has no output slots.
    None,

    /// The action has exactly one output slot.
    Scalar(OutputValue),

    /// Values for positional output slots, denial slots last.
    Sequence(Vec<OutputValue>),

    /// Values for named output slots, denial slots keyed by their property reference.
    Mapping(BTreeMap<String, OutputValue>),
}

impl ActionOutputs {
    /// Number of output slots with a value.
    pub fn arity(&self) -> usize {
        match self {
            ActionOutputs::None => 0,
            ActionOutputs::Scalar(_) => 1,
            ActionOutputs::Sequence(values) => values.len(),
            ActionOutputs::Mapping(values) => values.len(),
        }
    }
}
