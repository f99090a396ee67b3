//! Plain text output adapter.

use anyhow::Result;
use pod_core::{AnalysisResult, ResultOutput};
use std::io::Write;
use std::sync::Mutex;

/// Writes one `<path> => <verdict>` line per image.
///
/// The verdict is the predicted label, or the three feature values when no
/// classifier ran.
pub struct TextOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextOutput {
    /// Creates a text output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

fn format_line(result: &AnalysisResult) -> String {
    match &result.classification {
        Some(classification) => format!("{} => {}", result.path, classification.label),
        None => {
            let f = &result.features;
            format!(
                "{} => {} {} {}",
                result.path, f.pct05pc, f.pct2pk, f.absdiff
            )
        }
    }
}

impl ResultOutput for TextOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, result: &AnalysisResult) -> Result<()> {
        let line = format_line(result);
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{line}")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
