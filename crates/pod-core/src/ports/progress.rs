//! Per-image events of a classification batch.

use crate::domain::AnalysisResult;

/// What happened to one image of the batch, or to the batch as a whole.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The image decoded and its histogram is about to be built.
    Started {
        /// Path to the image.
        path: String,
        /// Position of the image in source order.
        index: usize,
        /// Source size hint, when the source can count ahead.
        total: Option<usize>,
    },
    /// Features were extracted and, with a model, a label assigned.
    Completed {
        /// Row that was handed to the result output.
        result: AnalysisResult,
    },
    /// No row was written: decoding, feature extraction or the classifier failed.
    Skipped {
        /// Path to the image.
        path: String,
        /// Error chain of the failure.
        reason: String,
    },
    /// The source is exhausted and the output flushed.
    Finished {
        /// Rows written.
        processed: usize,
        /// Images without a row.
        skipped: usize,
    },
}

/// Receiver of batch events, such as a terminal progress bar.
pub trait ProgressSink: Send + Sync {
    /// Handles one event. Events arrive in batch order from a single thread.
    fn on_event(&self, event: ProgressEvent);
}
