//! Error type for rule evaluation.
//!
//! Only configuration is fallible. Degenerate datasets (empty, or a single
//! point under sample standard deviation) are not errors: their statistics
//! propagate as NaN or infinity and the result is flagged invalid.

use thiserror::Error;

/// Errors returned by [`analyze_with`](crate::spc::analyze_with).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShewhartError {
    /// The configuration cannot be used for an analysis.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the offending setting.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShewhartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = ShewhartError::InvalidConfiguration {
            reason: "min_points must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: min_points must be at least 1"
        );
    }
}
