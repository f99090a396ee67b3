//! Test support utilities for photo-or-drawing.
//!
//! Provides mocks, a stub classifier and synthetic image builders for
//! testing the classification pipeline.
//!
//! # Example
//!
//! ```
//! use pod_test_support::{MockImageSource, StubClassifier, SyntheticImageBuilder};
//!
//! // Create synthetic test images
//! let drawing = SyntheticImageBuilder::black_and_white(64, 64);
//! let photo = SyntheticImageBuilder::tonal_gradient(100, 10, 50, 149);
//!
//! // Create mock image source and a classifier that always says "drawing"
//! let source = MockImageSource::new(vec![drawing, photo]);
//! let classifier = StubClassifier::fixed([0.1, 0.9]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockImageSource, MockProgressSink, MockResultOutput, StubClassifier};
