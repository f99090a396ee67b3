//! Classify command - label images as photo or drawing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pod_adapters::{default_model_path, GaussianModel};
use tracing::info;

use super::input::InputArgs;
use super::RunSummary;
use crate::config::AppConfig;

/// Arguments for the classify command.
#[derive(Args, Clone, Default)]
pub struct ClassifyArgs {
    /// Input and output selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Model parameter file (overrides default and config)
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,
}

impl ClassifyArgs {
    /// Apply configuration file values, respecting CLI precedence.
    #[must_use]
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.input = self.input.with_config(config);
        if self.model.is_none() {
            self.model.clone_from(&config.model.path);
        }
        self
    }

    /// Model file with fallback to the default location.
    pub fn model_path(&self) -> PathBuf {
        self.model.clone().unwrap_or_else(default_model_path)
    }
}

/// Run the classify command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded, no paths are given, or
/// output cannot be written.
pub fn run(args: &ClassifyArgs) -> Result<RunSummary> {
    info!(
        "Running classify command on {} paths",
        args.input.paths.len()
    );

    // Checked before the model so a bare invocation reports missing paths
    args.input.image_paths()?;

    let model = GaussianModel::load(&args.model_path())?;
    args.input.run(Some(&model), None)
}
