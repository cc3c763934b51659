//! References to properties of dashboard components.
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::InvalidPropertyRef;

/// Property of modal components controlling their visibility.
pub const MODAL_OPEN_PROPERTY: &str = "is_open";

/// Reference to a property of a dashboard component, written as `<component_id>.<property>`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyRef {
    component_id: String,
    property: String,
}

impl PropertyRef {
    /// ID of the referenced component.
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Reference the visibility property of the modal with the given ID.
    pub fn modal_open(modal_id: &str) -> Result<PropertyRef, InvalidPropertyRef> {
        PropertyRef::new(modal_id, MODAL_OPEN_PROPERTY)
    }

    /// Reference a component property from its parts.
    pub fn new(component_id: &str, property: &str) -> Result<PropertyRef, InvalidPropertyRef> {
        let valid = |part: &str| !part.is_empty() && !part.contains('.');
        if !valid(component_id) || !valid(property) {
            let reference = format!("{}.{}", component_id, property);
            return Err(InvalidPropertyRef { reference });
        }
        Ok(PropertyRef {
            component_id: component_id.to_string(),
            property: property.to_string(),
        })
    }

    /// Name of the referenced property.
    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component_id, self.property)
    }
}

impl FromStr for PropertyRef {
    type Err = InvalidPropertyRef;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (component_id, property) = value
            .split_once('.')
            .ok_or_else(|| InvalidPropertyRef::from(value))?;
        PropertyRef::new(component_id, property).map_err(|_| InvalidPropertyRef::from(value))
    }
}

impl TryFrom<String> for PropertyRef {
    type Error = InvalidPropertyRef;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PropertyRef> for String {
    fn from(value: PropertyRef) -> Self {
        value.to_string()
    }
}
