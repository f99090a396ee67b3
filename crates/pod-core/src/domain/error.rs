//! Errors raised by histogram feature extraction.

use thiserror::Error;

/// Failure of a histogram or feature computation.
///
/// Neither variant is retried: callers decide whether to skip the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// A required division is undefined for this input.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// An extremum search was given an inverted or out-of-bounds range.
    #[error("invalid histogram range: {start}..{end}")]
    InvalidRange {
        /// First index (or walk origin) of the offending range.
        start: usize,
        /// End index (or walk target) of the offending range.
        end: usize,
    },
}
