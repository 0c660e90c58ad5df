//! Predicate layer for audience targeting: evaluates one condition (an
//! attribute name, a comparison operator, and a literal) against one user's
//! attribute set. Combining conditions with boolean logic, bucketing, and
//! datafile handling all live in the decision engine above this crate.

pub mod condition;
pub mod context;
pub mod errors;
pub mod matchers;
pub mod semver;
pub mod value;
mod comparison;

use matchers::Registry;
use tracing::debug;

pub use condition::{Condition, MatchType};
pub use context::UserContext;
pub use errors::{MatchError, Result};
pub use value::Value;

/// The main evaluator. Holds the matcher registry and dispatches each
/// condition to the matcher registered under its match-type spelling.
pub struct Evaluator {
    registry: Registry,
}

impl Evaluator {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Evaluate one condition against one user's attributes. Errors mean the
    /// condition could not be evaluated; callers must treat that as unknown,
    /// not as a failed match.
    pub fn evaluate(&self, condition: &Condition, user: &UserContext) -> Result<bool> {
        let matcher = self
            .registry
            .get(condition.match_type.as_str())
            .ok_or_else(|| MatchError::UnknownMatchType(condition.match_type.to_string()))?;
        let verdict = matcher.matches(condition, user);
        debug!(
            condition = %condition.name,
            match_type = %condition.match_type,
            ?verdict,
            "condition evaluated"
        );
        verdict
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Registry::with_builtins())
    }
}

/// Convenience: evaluate with the built-in matcher set.
pub fn evaluate(condition: &Condition, user: &UserContext) -> Result<bool> {
    Evaluator::default().evaluate(condition, user)
}
