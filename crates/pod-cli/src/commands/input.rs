//! Shared image input and batch processing for the image commands.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pod_adapters::{read_path_list, FsImageSource};
use pod_core::{
    classify_features, extract_features, AnalysisResult, Classifier, ImageSource, Label,
    ProgressEvent, ProgressSink, ResultOutput,
};
use tracing::{debug, info};

use super::RunSummary;
use crate::config::AppConfig;
use crate::output::{self, OutputFormat, ProgressBar};

/// Input selection and output flags shared by `classify` and `features`.
#[derive(Args, Clone, Default)]
pub struct InputArgs {
    /// Files or directories to process
    pub paths: Vec<PathBuf>,

    /// Read additional image paths from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl InputArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        if !self.recursive {
            self.recursive = config.general.recursive.unwrap_or(false);
        }

        if self.format.is_none() {
            self.format = config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::from_config);
        }

        if !self.pretty {
            self.pretty = config.output.pretty.unwrap_or(false);
        }
        if !self.progress {
            self.progress = config.output.progress.unwrap_or(false);
        }

        self
    }

    /// Output format with fallback to JSONL.
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Positional paths followed by the entries of `--list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list file cannot be read or no paths remain.
    pub fn image_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = self.paths.clone();
        if let Some(list) = &self.list {
            let listed = read_path_list(list)?;
            debug!("Read {} paths from {}", listed.len(), list.display());
            paths.extend(listed);
        }
        if paths.is_empty() {
            anyhow::bail!("No paths specified");
        }
        Ok(paths)
    }

    /// Runs the batch over every selected image, writing to stdout.
    ///
    /// Images are classified when `classifier` is given; `label` fills the
    /// ARFF class column otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if no paths are given or output cannot be written.
    pub fn run(&self, classifier: Option<&dyn Classifier>, label: Option<Label>) -> Result<RunSummary> {
        let source = FsImageSource::new(self.image_paths()?, self.recursive);
        let total = source.count_hint();
        info!("Processing {} images", total.unwrap_or(0));

        let show_progress = !self.quiet && (self.progress || std::io::stderr().is_terminal());
        let progress = ProgressBar::new(total.map(|t| t as u64), self.quiet, show_progress);

        let output = output::build(
            self.format(),
            self.pretty,
            label,
            Box::new(std::io::stdout()),
        )?;

        process_images(&source, classifier, output.as_ref(), &progress)
    }
}

/// Extracts features from every image of `source`, classifies them when a
/// classifier is given, and writes the results.
///
/// Images that fail to load, have no usable histogram, or that the
/// classifier rejects are reported as skipped and the batch continues.
///
/// # Errors
///
/// Returns an error only if writing or flushing the output fails.
pub fn process_images(
    source: &dyn ImageSource,
    classifier: Option<&dyn Classifier>,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
) -> Result<RunSummary> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                // Note: error message contains the path via anyhow context
                debug!("Load failed: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        let path = image.path.clone();

        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        let analyzed = extract_features(&image.image)
            .map_err(anyhow::Error::from)
            .and_then(|features| {
                let classification = classifier
                    .map(|c| classify_features(&features, c))
                    .transpose()?;
                Ok((features, classification))
            });

        let (features, classification) = match analyzed {
            Ok(analyzed) => analyzed,
            Err(e) => {
                debug!("Analysis failed for {path}: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        let result = AnalysisResult {
            path,
            timestamp: iso_timestamp(),
            dimensions: image.dimensions(),
            features,
            classification,
        };

        output.write(&result)?;
        progress.on_event(ProgressEvent::Completed { result });
        processed += 1;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    Ok(RunSummary { processed, skipped })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
