//! Normalized 256-bin grayscale histogram.

use std::ops::Index;

use image::{DynamicImage, RgbImage};

use crate::domain::FeatureError;

/// Number of histogram bins, one per grayscale level.
pub const HIST_WIDTH: usize = 256;

/// Total mass of a normalized histogram.
pub const HIST_HEIGHT: u64 = 100;

const LUMINANCE_RED: f64 = 0.299;
const LUMINANCE_GREEN: f64 = 0.587;
const LUMINANCE_BLUE: f64 = 0.114;

/// Luminance-weighted grayscale level of an RGB triple.
///
/// The weighted sum is truncated, not rounded, so some levels shift down by
/// one (mid gray `128` maps to `127`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn gray_level(red: u8, green: u8, blue: u8) -> u8 {
    let luminance = LUMINANCE_RED * f64::from(red)
        + LUMINANCE_GREEN * f64::from(green)
        + LUMINANCE_BLUE * f64::from(blue);
    // Weights sum to 1.0, so the value stays within 0.0..=255.0
    luminance as u8
}

/// Grayscale occurrence histogram scaled so all bins sum to [`HIST_HEIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct GrayHistogram {
    bins: [f64; HIST_WIDTH],
}

impl GrayHistogram {
    /// Builds the histogram of a decoded image. Alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::DegenerateInput`] if the image has no pixels.
    pub fn from_image(image: &DynamicImage) -> Result<Self, FeatureError> {
        Self::from_rgb(&image.to_rgb8())
    }

    /// Builds the histogram of an RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::DegenerateInput`] if the image has no pixels.
    pub fn from_rgb(image: &RgbImage) -> Result<Self, FeatureError> {
        let mut counts = [0u64; HIST_WIDTH];
        for pixel in image.pixels() {
            let [red, green, blue] = pixel.0;
            counts[usize::from(gray_level(red, green, blue))] += 1;
        }
        let total = u64::from(image.width()) * u64::from(image.height());
        Self::from_counts(&counts, total)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_counts(counts: &[u64; HIST_WIDTH], total: u64) -> Result<Self, FeatureError> {
        if total == 0 {
            return Err(FeatureError::DegenerateInput("image has no pixels"));
        }
        let mut bins = [0.0; HIST_WIDTH];
        for (bin, &count) in bins.iter_mut().zip(counts) {
            if count > 0 {
                *bin = (count * HIST_HEIGHT) as f64 / total as f64;
            }
        }
        Ok(Self { bins })
    }

    /// Wraps precomputed bin values.
    #[must_use]
    pub const fn from_bins(bins: [f64; HIST_WIDTH]) -> Self {
        Self { bins }
    }

    /// Returns the bin values, indexed by grayscale level.
    #[must_use]
    pub const fn bins(&self) -> &[f64; HIST_WIDTH] {
        &self.bins
    }

    /// Sum of all bins.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.bins.iter().sum()
    }
}

impl Index<usize> for GrayHistogram {
    type Output = f64;

    fn index(&self, level: usize) -> &f64 {
        &self.bins[level]
    }
}
