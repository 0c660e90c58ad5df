use super::Matcher;
use crate::comparison::cmp_values;
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::Result;

/// Matches when the attribute orders strictly above the condition literal.
/// Defined for numbers and string ordinals only.
pub struct GtMatcher;

impl Matcher for GtMatcher {
    fn name(&self) -> &'static str {
        "gt"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        let attribute = user.get_attribute(&condition.name)?;
        cmp_values(condition, attribute, |ord| ord.is_gt())
    }
}
