// ============================================================================
// Math Errors
// Error types for precision validation and domain checks
// ============================================================================

use std::fmt;

/// Errors raised by the series entry points before any computation starts.
///
/// Special values (not-a-number, infinity) are never reported through this
/// type: they flow through computations as `Decimal` values so that call
/// chains do not have to check every intermediate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// Requested precision was zero or negative
    InvalidPrecision(i64),
    /// Logarithm of zero or a negative value
    NonPositiveArgument,
    /// Input string could not be parsed as a decimal value
    InvalidLiteral,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidPrecision(prec) => {
                write!(f, "zero or negative precision: {}", prec)
            },
            MathError::NonPositiveArgument => {
                write!(f, "zero or negative argument for logarithm")
            },
            MathError::InvalidLiteral => {
                write!(f, "invalid input: could not parse decimal literal")
            },
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for the math entry points
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MathError::InvalidPrecision(-5).to_string(),
            "zero or negative precision: -5"
        );
        assert_eq!(
            MathError::NonPositiveArgument.to_string(),
            "zero or negative argument for logarithm"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MathError::InvalidPrecision(0), MathError::InvalidPrecision(0));
        assert_ne!(
            MathError::InvalidPrecision(0),
            MathError::NonPositiveArgument
        );
    }
}
