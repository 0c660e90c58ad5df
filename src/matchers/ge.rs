use super::{match_any, ExactMatcher, LtMatcher, Matcher};
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::Result;

/// Composite matcher for the `ge` match type, built from the `lt` and
/// `exact` primitives rather than carrying its own comparison. It holds the
/// identity `ge(a, c) == lt(a, c) || exact(a, c)` whenever neither leg
/// errors.
pub struct GeMatcher;

impl Matcher for GeMatcher {
    fn name(&self) -> &'static str {
        "ge"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        match_any(&LtMatcher, &ExactMatcher, condition, user)
    }
}
