//! Photo-or-drawing core - histogram features and classification.
//!
//! This crate builds a normalized grayscale histogram from an image, derives
//! three tonal features from it and maps a trained classifier's posterior to
//! a [`Label`]. Image loading, model files and output live behind the
//! [`ports`].

pub mod classification;
pub mod domain;
pub mod features;
pub mod ports;

pub use classification::{classify, classify_features, extract_features};
pub use domain::{
    AnalysisResult, Classification, FeatureError, FeatureVector, ImageDimensions, ImageInfo, Label,
};
pub use features::GrayHistogram;
pub use ports::{Classifier, ImageSource, ProgressEvent, ProgressSink, ResultOutput};
