use crate::errors::{MatchError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The attribute set one evaluation reads from. Matchers only ever borrow it,
/// so a single context can serve any number of concurrent evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserContext {
    pub attributes: HashMap<String, Value>,
}

impl UserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Result<&Value> {
        self.attributes
            .get(name)
            .ok_or_else(|| MatchError::AttributeNotFound(name.to_string()))
    }

    /// Look up an attribute that must be a string, as the semver matchers
    /// require.
    pub fn get_string_attribute(&self, name: &str) -> Result<&str> {
        let value = self.get_attribute(name)?;
        value
            .as_str()
            .ok_or_else(|| MatchError::AttributeValueTypeInvalid {
                name: name.to_string(),
                expected: "string",
                actual: value.type_name(),
            })
    }
}

impl FromIterator<(String, Value)> for UserContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}
