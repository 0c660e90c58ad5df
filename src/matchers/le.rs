use super::{match_any, ExactMatcher, GtMatcher, Matcher};
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::Result;

/// Composite matcher for the `le` match type, the mirror of `ge`: built from
/// the `gt` and `exact` primitives with the same composition rules.
pub struct LeMatcher;

impl Matcher for LeMatcher {
    fn name(&self) -> &'static str {
        "le"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        match_any(&GtMatcher, &ExactMatcher, condition, user)
    }
}
