//! Trained classifier port.

use crate::domain::FeatureVector;

/// A trained two-class model queried with histogram features.
///
/// Attribute order is `(pct05pc, pct2pk, absdiff)` and class index 0 is
/// `photo`, index 1 is `drawing`.
pub trait Classifier: Send + Sync {
    /// Returns the posterior distribution `[P(photo), P(drawing)]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot evaluate the instance.
    fn distribution_for_instance(&self, features: &FeatureVector) -> anyhow::Result<[f64; 2]>;
}
