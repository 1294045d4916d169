//! Validation errors reported while constructing pattern records.

use std::fmt;

/// Why a pattern record (or one of its tokens) failed to construct.
///
/// There is exactly one failure mode: the supplied data is malformed. Nothing
/// here is retryable, so the variants carry the offending input rather than
/// any recovery hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// The unit token is neither a positive fraction nor a known symbolic name.
    Unit(String),
    /// The resolution is not a positive, finite subdivision factor.
    Resolution(String),
    /// The event list contains no pitch tokens.
    EmptyEvent,
    /// An event entry does not match the pitch-name grammar.
    Pitch(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Unit(token) => write!(f, "Invalid unit: '{}'", token),
            ValidationError::Resolution(value) => write!(f, "Invalid resolution: '{}'", value),
            ValidationError::EmptyEvent => write!(f, "Pattern event list is empty"),
            ValidationError::Pitch(token) => write!(f, "Invalid pitch name: '{}'", token),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Unit("xyz".to_string()).to_string(),
            "Invalid unit: 'xyz'"
        );
        assert_eq!(
            ValidationError::Resolution("0".to_string()).to_string(),
            "Invalid resolution: '0'"
        );
        assert_eq!(
            ValidationError::EmptyEvent.to_string(),
            "Pattern event list is empty"
        );
        assert_eq!(
            ValidationError::Pitch("h4".to_string()).to_string(),
            "Invalid pitch name: 'h4'"
        );
    }
}
