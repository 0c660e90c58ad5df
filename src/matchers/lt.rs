use super::Matcher;
use crate::comparison::cmp_values;
use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::Result;

/// Matches when the attribute orders strictly below the condition literal.
/// Defined for numbers and string ordinals only.
pub struct LtMatcher;

impl Matcher for LtMatcher {
    fn name(&self) -> &'static str {
        "lt"
    }

    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        let attribute = user.get_attribute(&condition.name)?;
        cmp_values(condition, attribute, |ord| ord.is_lt())
    }
}
