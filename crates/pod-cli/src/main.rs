//! Photo or drawing CLI - classify images by their tonal histogram.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{Cli, Commands, ExitCode, RunSummary};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Classify(args)) => batch(commands::classify::run(&args.with_config(&config))),
        Some(Commands::Features(mut args)) => {
            args.input = args.input.with_config(&config);
            batch(commands::features::run(&args))
        }
        Some(Commands::Model(ref args)) => match commands::model::run(args, &config) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::Error
            }
        },
        None => {
            // Default behavior: run classify with flattened args
            if cli.classify.input.paths.is_empty() && cli.classify.input.list.is_none() {
                eprintln!("error: No paths specified. Use --help for usage information.");
                return ExitCode::Error.into();
            }
            batch(commands::classify::run(&cli.classify.with_config(&config)))
        }
    };

    exit_code.into()
}

fn batch(result: anyhow::Result<RunSummary>) -> ExitCode {
    match result {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
