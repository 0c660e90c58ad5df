use crate::condition::Condition;
use crate::errors::{MatchError, Result};
use crate::value::Value;
use std::cmp::Ordering;

/// Shared plumbing for the ordering matchers: resolve the attribute and the
/// condition literal to a three-way ordering (attribute relative to the
/// literal), then apply the caller's predicate.
///
/// Only numbers and strings have an ordinal; a bool condition literal is
/// unsupported, and a variant mismatch between the two sides is a type
/// error. Numbers compare with no tolerance: `42.0000` equals `42` and
/// `42.9999` is greater than `42`.
pub(crate) fn cmp_values<F>(condition: &Condition, attribute: &Value, pred_on_ord: F) -> Result<bool>
where
    F: Fn(Ordering) -> bool,
{
    match (&condition.value, attribute) {
        (Value::Number(want), Value::Number(have)) => {
            // NaN never reaches here through JSON; a hand-built NaN has no
            // ordering and cannot be compared.
            let ord = have
                .partial_cmp(want)
                .ok_or_else(|| MatchError::AttributeValueTypeInvalid {
                    name: condition.name.clone(),
                    expected: "number",
                    actual: "number",
                })?;
            Ok(pred_on_ord(ord))
        }
        (Value::String(want), Value::String(have)) => Ok(pred_on_ord(have.as_str().cmp(want))),
        (Value::Bool(_), _) => Err(MatchError::UnsupportedConditionValueType(
            condition.name.clone(),
        )),
        (want, have) => Err(MatchError::AttributeValueTypeInvalid {
            name: condition.name.clone(),
            expected: want.type_name(),
            actual: have.type_name(),
        }),
    }
}
