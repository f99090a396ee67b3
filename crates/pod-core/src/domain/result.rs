//! Analysis result types.

use image::GenericImageView;
use serde::{Deserialize, Serialize};

use super::{Classification, FeatureVector};

/// Complete analysis result for a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Path to the analyzed image.
    pub path: String,
    /// Timestamp of analysis (ISO 8601).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// Histogram features.
    pub features: FeatureVector,
    /// Classifier verdict, absent when only features were extracted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classification: Option<Classification>,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates image dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Basic image information extracted during loading.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path to the image file.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded image data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Wraps a decoded image, reading its dimensions.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Returns the image dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}
