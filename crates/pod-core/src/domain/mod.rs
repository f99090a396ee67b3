//! Core domain types for photo/drawing classification.

mod error;
mod features;
mod result;

pub use error::FeatureError;
pub use features::{Classification, FeatureVector, Label};
pub use result::{AnalysisResult, ImageDimensions, ImageInfo};
