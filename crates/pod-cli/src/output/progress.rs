//! Terminal feedback for a classification batch.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use pod_core::{ProgressEvent, ProgressSink};

/// Draws an indicatif bar on stderr and reports skipped images.
///
/// With the bar hidden, skips still print one warning line each so that a
/// piped run shows why an image has no row.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// `total` sizes the bar, otherwise a spinner is drawn. `quiet` drops
    /// every event, skips included.
    #[must_use]
    pub fn new(total: Option<u64>, quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = total.map_or_else(IndicatifBar::new_spinner, IndicatifBar::new);

            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }

            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }
}

impl ProgressSink for ProgressBar {
    fn on_event(&self, event: ProgressEvent) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::Started { path, index, total } => {
                if let Some(bar) = &self.bar {
                    if let Some(t) = total {
                        bar.set_length(t as u64);
                    }
                    bar.set_position(index as u64);
                    bar.set_message(path);
                }
            }
            ProgressEvent::Completed { result } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                    let message = match result.classification {
                        Some(classification) => format!("{}: {}", result.path, classification.label),
                        None => result.path,
                    };
                    bar.set_message(message);
                }
            }
            ProgressEvent::Skipped { path, reason } => {
                let line = format!("warning: skipping {path}: {reason}");
                match &self.bar {
                    Some(bar) => {
                        bar.inc(1);
                        bar.println(line);
                    }
                    None => eprintln!("{line}"),
                }
            }
            ProgressEvent::Finished { processed, skipped } => {
                if let Some(bar) = &self.bar {
                    bar.finish_with_message(format!(
                        "{processed} classified, {skipped} skipped"
                    ));
                }
            }
        }
    }
}
