//! CLI command definitions and handlers.

pub mod classify;
pub mod features;
pub mod input;
pub mod model;

use clap::{Parser, Subcommand};

/// Photo or drawing - classify images by their tonal histogram
#[derive(Parser)]
#[command(name = "photo-or-drawing")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Shared classify arguments (paths, model, output flags).
    #[command(flatten)]
    pub classify: classify::ClassifyArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify images as photo or drawing
    Classify(classify::ClassifyArgs),
    /// Print histogram features without classifying
    Features(features::FeaturesArgs),
    /// Inspect the classifier model
    Model(model::ModelArgs),
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every image was processed.
    Success,
    /// At least one image was skipped.
    Skipped,
    /// The command failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::Skipped => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of images written to the output.
    pub processed: usize,
    /// Number of images skipped.
    pub skipped: usize,
}

impl RunSummary {
    /// Exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.skipped > 0 {
            ExitCode::Skipped
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_code_from_summary() {
        let clean = RunSummary {
            processed: 3,
            skipped: 0,
        };
        let partial = RunSummary {
            processed: 2,
            skipped: 1,
        };

        assert_eq!(clean.exit_code(), ExitCode::Success);
        assert_eq!(partial.exit_code(), ExitCode::Skipped);
    }
}
