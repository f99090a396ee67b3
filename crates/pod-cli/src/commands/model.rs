//! Model command - inspect the classifier model.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use pod_adapters::{default_model_path, GaussianModel};

use crate::config::AppConfig;

/// Arguments for the model command
#[derive(Args)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

/// Model subcommands
#[derive(Subcommand)]
pub enum ModelCommand {
    /// Print the model file path
    Path,
    /// Load the model and print its parameters
    Show {
        /// Model parameter file (overrides default and config)
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,
    },
}

/// Run the model command.
///
/// # Errors
///
/// Returns an error if `show` cannot load the model.
pub fn run(args: &ModelArgs, config: &AppConfig) -> Result<()> {
    match &args.command {
        ModelCommand::Path => {
            println!("{}", resolve(None, config).display());
            Ok(())
        }
        ModelCommand::Show { model } => {
            let path = resolve(model.clone(), config);
            print!("{}", render(&path)?);
            Ok(())
        }
    }
}

/// CLI path, then config, then the default location.
fn resolve(cli: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli.or_else(|| config.model.path.clone())
        .unwrap_or_else(default_model_path)
}

fn render(path: &std::path::Path) -> Result<String> {
    let model = GaussianModel::load(path)?;
    let params = toml::to_string(&model).context("Failed to render model parameters")?;
    Ok(format!("# {}\n{params}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MODEL: &str = r"
[photo]
mean = [35.0, 25.0, 1.5]
std_dev = [15.0, 15.0, 1.5]

[drawing]
mean = [3.0, 60.0, 40.0]
std_dev = [5.0, 30.0, 25.0]
";

    #[test]
    fn test_resolve_precedence() {
        let config: AppConfig = toml::from_str("[model]\npath = 'cfg.toml'").unwrap();

        assert_eq!(
            resolve(Some(PathBuf::from("cli.toml")), &config),
            PathBuf::from("cli.toml")
        );
        assert_eq!(resolve(None, &config), PathBuf::from("cfg.toml"));
        assert_eq!(resolve(None, &AppConfig::default()), default_model_path());
    }

    #[test]
    fn test_render_includes_defaulted_prior() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.toml");
        std::fs::write(&path, MODEL).unwrap();

        let text = render(&path).unwrap();

        assert!(text.starts_with(&format!("# {}", path.display())));
        assert!(text.contains("[photo]"));
        assert!(text.contains("prior = 0.5"));
        assert!(text.contains("std_dev = [5.0, 30.0, 25.0]"));
    }

    #[test]
    fn test_render_missing_model() {
        let err = render(std::path::Path::new("/nonexistent/model.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read model file"));
    }
}
