//! Result output port.

use crate::domain::AnalysisResult;

/// Port for writing per-image features and labels.
pub trait ResultOutput: Send + Sync {
    /// Writes the result for one image.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, result: &AnalysisResult) -> anyhow::Result<()>;

    /// Completes the batch. Formats that buffer emit their output here.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
