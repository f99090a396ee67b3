//! Features command - print histogram features without a model.

use anyhow::Result;
use clap::Args;
use pod_core::Label;
use tracing::info;

use super::input::InputArgs;
use super::RunSummary;

/// Parse a class label for the ARFF class column.
fn parse_label(s: &str) -> Result<Label, String> {
    s.parse()
}

/// Arguments for the features command.
#[derive(Args, Clone)]
pub struct FeaturesArgs {
    /// Input and output selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Class written for every image with --format arff (photo or drawing)
    #[arg(long, value_parser = parse_label)]
    pub label: Option<Label>,
}

/// Run the features command.
///
/// # Errors
///
/// Returns an error if no paths are given or output cannot be written.
pub fn run(args: &FeaturesArgs) -> Result<RunSummary> {
    info!(
        "Running features command on {} paths",
        args.input.paths.len()
    );
    args.input.run(None, args.label)
}
