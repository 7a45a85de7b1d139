//! Error types for phrase matching

use serde::Serialize;
use thiserror::Error;

/// Errors that stop a search before any window is scanned
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A configuration value is outside its valid range
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// The search phrase has no tokens
    #[error("invalid configuration: search phrase is empty")]
    EmptyPhrase,
}

impl MatchError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Failure raised by a [`TokenDistance`](crate::distance::TokenDistance) metric
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum DistanceError {
    /// Token exceeds the metric's character limit
    #[error("token of {len} chars exceeds the {max} char limit")]
    InputTooLong { len: usize, max: usize },

    /// Metric produced a negative, NaN or infinite distance
    #[error("metric returned invalid distance {value}")]
    InvalidValue { value: f64 },
}

/// Why a window comparison failed
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum FailureCause {
    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error("token index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// An internal failure caught during the window scan.
///
/// The scan stops at `window`; records from earlier windows are kept.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("comparison failed at window {window}: {cause}")]
pub struct ComparisonFailure {
    pub window: usize,
    pub cause: FailureCause,
}

impl ComparisonFailure {
    pub(crate) fn new(window: usize, cause: impl Into<FailureCause>) -> Self {
        Self {
            window,
            cause: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::invalid("scale_denominator", "must be > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: scale_denominator must be > 0, got 0"
        );

        let failure = ComparisonFailure::new(3, DistanceError::InputTooLong { len: 12, max: 10 });
        assert_eq!(
            failure.to_string(),
            "comparison failed at window 3: token of 12 chars exceeds the 10 char limit"
        );
    }
}
