//! Error types for aggregation operations.
//!
//! Only true domain errors are reported here. Degenerate-but-defined
//! results (the mean of an empty slice, a sampled variance over zero
//! draws) follow IEEE 754 and come back as NaN or ±∞.

use thiserror::Error;

/// Result type for aggregation operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised when an operation has no meaningful value for its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The operation has no defined value over zero elements.
    #[error("{operation} requires a non-empty sequence")]
    EmptySequence { operation: &'static str },

    /// A probability argument fell outside the open interval `(0, 1)`.
    #[error("probability must lie strictly inside (0, 1), got {0}")]
    ProbabilityOutOfDomain(f64),

    /// `floor(p * len)` does not index into the sorted sequence.
    #[error("percentile {p} maps to index {index} outside a sequence of length {len}")]
    PercentileOutOfRange { p: f64, index: f64, len: usize },

    /// A batched reducer was configured with a chunk size of zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::EmptySequence { operation: "median" };
        assert_eq!(err.to_string(), "median requires a non-empty sequence");

        let err = StatsError::ProbabilityOutOfDomain(1.5);
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("(0, 1)"));

        let err = StatsError::PercentileOutOfRange {
            p: 1.0,
            index: 4.0,
            len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("index 4"));
        assert!(msg.contains("length 4"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&StatsError::InvalidChunkSize);
    }
}
