use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Everything a matcher can report back to the decision layer above it.
// None of these are fatal; a populated error means the condition evaluated
// to "unknown", never "false".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    // The user context holds no value under the condition's attribute name
    #[error("no attribute named \"{0}\" in the user context")]
    AttributeNotFound(String),

    // The attribute exists but its variant cannot be compared under the
    // requested match type
    #[error("attribute \"{name}\" is a {actual}, expected a {expected}")]
    AttributeValueTypeInvalid {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    // The condition's own literal is not of the variant its match type needs
    #[error("audience condition \"{0}\" evaluated to UNKNOWN because the condition value type is not supported")]
    UnsupportedConditionValueType(String),

    // A version string failed grammar validation
    #[error("version string \"{0}\" is not a valid semantic version")]
    AttributeFormatInvalid(String),

    // No matcher registered under the condition's match type
    #[error("no matcher registered for match type \"{0}\"")]
    UnknownMatchType(String),
}

// Type alias for results that use `MatchError` as the error type
pub type Result<T> = std::result::Result<T, MatchError>;
