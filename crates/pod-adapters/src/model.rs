//! Gaussian model file adapter.
//!
//! Evaluates an externally trained per-class normal model over the three
//! histogram features. Parameters come from a TOML file:
//!
//! ```toml
//! [photo]
//! prior = 0.5
//! mean = [35.0, 25.0, 1.5]
//! std_dev = [15.0, 15.0, 1.5]
//!
//! [drawing]
//! mean = [3.0, 60.0, 40.0]
//! std_dev = [5.0, 30.0, 25.0]
//! ```

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pod_core::{Classifier, FeatureVector, Label};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Feature names in attribute order.
pub const FEATURE_NAMES: [&str; 3] = ["pct05pc", "pct2pk", "absdiff"];

/// Normal-distribution parameters for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassParams {
    /// Prior probability of the class.
    #[serde(default = "default_prior")]
    pub prior: f64,
    /// Per-feature mean.
    pub mean: [f64; 3],
    /// Per-feature standard deviation.
    pub std_dev: [f64; 3],
}

const fn default_prior() -> f64 {
    0.5
}

impl ClassParams {
    /// Unnormalized log posterior of `x` under this class.
    fn log_score(&self, x: &[f64; 3]) -> f64 {
        let log_likelihood: f64 = x
            .iter()
            .zip(self.mean.iter().zip(&self.std_dev))
            .map(|(value, (mean, std_dev))| {
                let z = (value - mean) / std_dev;
                -0.5 * z * z - std_dev.ln() - 0.5 * TAU.ln()
            })
            .sum();
        self.prior.ln() + log_likelihood
    }

    fn validate(&self, label: Label) -> Result<()> {
        if !(self.prior > 0.0 && self.prior <= 1.0) {
            anyhow::bail!("{label}.prior must be in (0, 1], got {}", self.prior);
        }
        for (name, (mean, std_dev)) in FEATURE_NAMES
            .iter()
            .zip(self.mean.iter().zip(&self.std_dev))
        {
            if !mean.is_finite() {
                anyhow::bail!("{label}.mean for {name} must be finite, got {mean}");
            }
            if !(std_dev.is_finite() && *std_dev > 0.0) {
                anyhow::bail!("{label}.std_dev for {name} must be positive, got {std_dev}");
            }
        }
        Ok(())
    }
}

/// Two-class Gaussian model loaded from a parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaussianModel {
    /// Parameters for `photo` (class index 0).
    pub photo: ClassParams,
    /// Parameters for `drawing` (class index 1).
    pub drawing: ClassParams,
}

impl GaussianModel {
    /// Loads and validates a model file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML for a
    /// model, or holds out-of-range parameters.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading model: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid model file: {}", path.display()))
    }

    /// Parses and validates model parameters from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML or out-of-range parameters.
    pub fn from_toml(content: &str) -> Result<Self> {
        let model: Self = toml::from_str(content)?;
        model.validate()?;
        Ok(model)
    }

    /// Parameters for `label`.
    #[must_use]
    pub const fn class(&self, label: Label) -> &ClassParams {
        match label {
            Label::Photo => &self.photo,
            Label::Drawing => &self.drawing,
        }
    }

    fn validate(&self) -> Result<()> {
        for label in Label::ALL {
            self.class(label).validate(label)?;
        }
        Ok(())
    }
}

impl Classifier for GaussianModel {
    fn distribution_for_instance(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        let x = features.to_array();
        if x.iter().any(|value| !value.is_finite()) {
            anyhow::bail!("feature vector is not finite: {x:?}");
        }

        let scores = Label::ALL.map(|label| self.class(label).log_score(&x));
        let max = scores[0].max(scores[1]);
        let weights = scores.map(|score| (score - max).exp());
        let total = weights[0] + weights[1];
        Ok(weights.map(|weight| weight / total))
    }
}

/// Returns the default model file path.
///
/// Uses `XDG_DATA_HOME/photo-or-drawing/model.toml` or the platform equivalent.
#[must_use]
pub fn default_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("photo-or-drawing")
        .join("model.toml")
}
