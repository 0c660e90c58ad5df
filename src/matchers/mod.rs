//! The condition matcher set. One matcher per match type; the decision
//! engine above picks a matcher by the condition's match-type spelling and
//! gets back `Result<bool>`. An error means the condition could not be
//! evaluated and must be treated as unknown, never as false.

mod exact;
mod ge;
mod gt;
mod le;
mod lt;
mod semver;

pub use exact::ExactMatcher;
pub use ge::GeMatcher;
pub use gt::GtMatcher;
pub use le::LeMatcher;
pub use lt::LtMatcher;
pub use semver::{
    SemverEqMatcher, SemverGeMatcher, SemverGtMatcher, SemverLeMatcher, SemverLtMatcher,
};

use crate::condition::Condition;
use crate::context::UserContext;
use crate::errors::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for the pluggable predicates behind each match type.
pub trait Matcher: Send + Sync {
    /// The match-type spelling this matcher serves; doubles as its registry key.
    fn name(&self) -> &'static str;
    fn matches(&self, condition: &Condition, user: &UserContext) -> Result<bool>;
}

/// Thread-safe matcher registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Matcher>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Matcher>> = HashMap::new();
        map.insert("exact", Arc::new(ExactMatcher));
        map.insert("gt", Arc::new(GtMatcher));
        map.insert("ge", Arc::new(GeMatcher));
        map.insert("lt", Arc::new(LtMatcher));
        map.insert("le", Arc::new(LeMatcher));
        map.insert("semver_eq", Arc::new(SemverEqMatcher));
        map.insert("semver_ge", Arc::new(SemverGeMatcher));
        map.insert("semver_gt", Arc::new(SemverGtMatcher));
        map.insert("semver_le", Arc::new(SemverLeMatcher));
        map.insert("semver_lt", Arc::new(SemverLtMatcher));
        Self {
            inner: Arc::new(map),
        }
    }

    pub fn register<M: Matcher + 'static>(&mut self, matcher: M) {
        let map = Arc::make_mut(&mut self.inner);
        map.insert(matcher.name(), Arc::new(matcher));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Matcher>> {
        self.inner.get(name).cloned()
    }
}

/// Two-leg composition used by the `ge` and `le` matchers. The first leg
/// only counts when it cleanly matches; otherwise the verdict, and the
/// error if any, come from the second leg alone. A first-leg error is
/// dropped once the second leg completes.
pub(crate) fn match_any(
    first: &dyn Matcher,
    second: &dyn Matcher,
    condition: &Condition,
    user: &UserContext,
) -> Result<bool> {
    if let Ok(true) = first.matches(condition, user) {
        return Ok(true);
    }
    second.matches(condition, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::MatchType;
    use crate::errors::MatchError;

    #[test]
    fn builtins_cover_every_match_type() {
        let registry = Registry::with_builtins();
        for name in [
            "exact",
            "gt",
            "ge",
            "lt",
            "le",
            "semver_eq",
            "semver_ge",
            "semver_gt",
            "semver_le",
            "semver_lt",
        ] {
            let matcher = registry.get(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(matcher.name(), name);
        }
    }

    #[test]
    fn register_replaces_a_builtin() {
        struct AlwaysTrue;
        impl Matcher for AlwaysTrue {
            fn name(&self) -> &'static str {
                "exact"
            }
            fn matches(&self, _: &Condition, _: &UserContext) -> Result<bool> {
                Ok(true)
            }
        }

        let mut registry = Registry::with_builtins();
        registry.register(AlwaysTrue);

        let condition = Condition::new("anything", MatchType::Exact, 1.0);
        let user = UserContext::new();
        assert!(registry
            .get("exact")
            .unwrap()
            .matches(&condition, &user)
            .unwrap());
    }

    #[test]
    fn match_any_drops_a_first_leg_error_when_the_second_leg_completes() {
        struct Failing;
        impl Matcher for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }
            fn matches(&self, condition: &Condition, _: &UserContext) -> Result<bool> {
                Err(MatchError::UnsupportedConditionValueType(
                    condition.name.clone(),
                ))
            }
        }
        struct Clean(bool);
        impl Matcher for Clean {
            fn name(&self) -> &'static str {
                "clean"
            }
            fn matches(&self, _: &Condition, _: &UserContext) -> Result<bool> {
                Ok(self.0)
            }
        }

        let condition = Condition::new("attr", MatchType::Ge, 1.0);
        let user = UserContext::new();

        // second leg's clean verdict wins, first leg's error vanishes
        assert_eq!(
            match_any(&Failing, &Clean(false), &condition, &user),
            Ok(false)
        );
        assert_eq!(
            match_any(&Failing, &Clean(true), &condition, &user),
            Ok(true)
        );
        // and the second leg's error is the one surfaced
        assert_eq!(
            match_any(&Clean(false), &Failing, &condition, &user),
            Err(MatchError::UnsupportedConditionValueType("attr".into()))
        );
    }
}
