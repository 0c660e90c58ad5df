use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single targeting rule: which attribute to look at, how to compare it,
/// and the literal to compare against. The decision engine above this crate
/// owns the boolean combination of many of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Attribute name to look up in the user context.
    pub name: String,
    /// Which matcher evaluates this condition.
    #[serde(rename = "match")]
    pub match_type: MatchType,
    /// Literal the attribute is compared against. Must be of the variant the
    /// match type expects; a mismatch is a reportable error, not a panic.
    pub value: Value,
}

impl Condition {
    pub fn new(name: impl Into<String>, match_type: MatchType, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            match_type,
            value: value.into(),
        }
    }
}

/// The closed set of comparison operators, spelled the way they appear in a
/// datafile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Gt,
    Ge,
    Lt,
    Le,
    SemverEq,
    SemverGe,
    SemverGt,
    SemverLe,
    SemverLt,
}

impl MatchType {
    /// The datafile spelling; also the registry key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Gt => "gt",
            MatchType::Ge => "ge",
            MatchType::Lt => "lt",
            MatchType::Le => "le",
            MatchType::SemverEq => "semver_eq",
            MatchType::SemverGe => "semver_ge",
            MatchType::SemverGt => "semver_gt",
            MatchType::SemverLe => "semver_le",
            MatchType::SemverLt => "semver_lt",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn condition_deserializes_from_datafile_shape() {
        let cond: Condition =
            serde_json::from_str(r#"{"name":"app_version","match":"semver_ge","value":"2.0"}"#)
                .unwrap();
        assert_eq!(cond.name, "app_version");
        assert_eq!(cond.match_type, MatchType::SemverGe);
        assert_eq!(cond.value, Value::String("2.0".into()));
    }

    #[test]
    fn match_type_spellings_round_trip() {
        for mt in [
            MatchType::Exact,
            MatchType::Gt,
            MatchType::Ge,
            MatchType::Lt,
            MatchType::Le,
            MatchType::SemverEq,
            MatchType::SemverGe,
            MatchType::SemverGt,
            MatchType::SemverLe,
            MatchType::SemverLt,
        ] {
            let json = format!("\"{}\"", mt.as_str());
            let back: MatchType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mt);
        }
    }
}
