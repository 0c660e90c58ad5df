//! The semver matcher family: five thin wrappers that run the version
//! comparator once and read off one region of the three-way result.

use super::Matcher;
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::{MatchError, Result};
use crate::semver;
use std::cmp::Ordering;
use tracing::warn;

/// Shared evaluation for the family: the condition literal must be a string,
/// the attribute must be a string, and the comparator reports the
/// attribute's ordering relative to the target.
fn evaluate(condition: &Condition, user: &UserContext) -> Result<Ordering> {
    let target = condition.value.as_str().ok_or_else(|| {
        warn!(
            condition = %condition.name,
            "condition value is not a version string"
        );
        MatchError::UnsupportedConditionValueType(condition.name.clone())
    })?;
    let attribute = user.get_string_attribute(&condition.name)?;
    semver::compare(target, attribute)
}

/// Matches when the attribute version equals the target, to the target's
/// precision.
pub struct SemverEqMatcher;

impl Matcher for SemverEqMatcher {
    fn name(&self) -> &'static str {
        "semver_eq"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        evaluate(condition, user).map(|ord| ord.is_eq())
    }
}

/// Matches when the attribute version is at least the target.
pub struct SemverGeMatcher;

impl Matcher for SemverGeMatcher {
    fn name(&self) -> &'static str {
        "semver_ge"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        evaluate(condition, user).map(|ord| ord.is_ge())
    }
}

/// Matches when the attribute version is strictly newer than the target.
pub struct SemverGtMatcher;

impl Matcher for SemverGtMatcher {
    fn name(&self) -> &'static str {
        "semver_gt"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        evaluate(condition, user).map(|ord| ord.is_gt())
    }
}

/// Matches when the attribute version is at most the target.
pub struct SemverLeMatcher;

impl Matcher for SemverLeMatcher {
    fn name(&self) -> &'static str {
        "semver_le"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        evaluate(condition, user).map(|ord| ord.is_le())
    }
}

/// Matches when the attribute version is strictly older than the target.
pub struct SemverLtMatcher;

impl Matcher for SemverLtMatcher {
    fn name(&self) -> &'static str {
        "semver_lt"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        evaluate(condition, user).map(|ord| ord.is_lt())
    }
}
