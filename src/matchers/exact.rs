use super::Matcher;
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::{MatchError, Result};
use crate::value::Value;

/// Matches when the attribute equals the condition literal. All three value
/// variants are supported; the two sides must share a variant, with integer
/// and floating spellings of the same number counting as equal.
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        let attribute = user.get_attribute(&condition.name)?;
        match (&condition.value, attribute) {
            (Value::Number(want), Value::Number(have)) => Ok(have == want),
            (Value::String(want), Value::String(have)) => Ok(have == want),
            (Value::Bool(want), Value::Bool(have)) => Ok(have == want),
            (want, have) => Err(MatchError::AttributeValueTypeInvalid {
                name: condition.name.clone(),
                expected: want.type_name(),
                actual: have.type_name(),
            }),
        }
    }
}
