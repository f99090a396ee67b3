//! Image to label pipeline.

use image::DynamicImage;
use tracing::debug;

use crate::domain::{Classification, FeatureError, FeatureVector};
use crate::features::{feature_vector, GrayHistogram};
use crate::ports::Classifier;

/// Builds the histogram of `image` and computes its feature vector.
///
/// # Errors
///
/// Returns [`FeatureError::DegenerateInput`] for an image without pixels or
/// with a flat histogram.
pub fn extract_features(image: &DynamicImage) -> Result<FeatureVector, FeatureError> {
    let histogram = GrayHistogram::from_image(image)?;
    let features = feature_vector(&histogram)?;
    debug!(
        pct05pc = features.pct05pc,
        pct2pk = features.pct2pk,
        absdiff = features.absdiff,
        "extracted features"
    );
    Ok(features)
}

/// Queries `classifier` with `features` and labels the result.
///
/// # Errors
///
/// Classifier errors are returned unchanged.
pub fn classify_features(
    features: &FeatureVector,
    classifier: &dyn Classifier,
) -> anyhow::Result<Classification> {
    let distribution = classifier.distribution_for_instance(features)?;
    Ok(Classification::from_distribution(distribution))
}

/// Classifies `image` as photo or drawing.
///
/// # Errors
///
/// Returns a [`FeatureError`] (downcastable from the `anyhow::Error`) when
/// features cannot be computed, or the classifier's own error.
pub fn classify(image: &DynamicImage, classifier: &dyn Classifier) -> anyhow::Result<Classification> {
    let features = extract_features(image)?;
    classify_features(&features, classifier)
}
