//! JSON output adapter.

use anyhow::Result;
use pod_core::{AnalysisResult, ResultOutput};
use std::io::Write;
use std::sync::Mutex;

/// JSON output adapter.
///
/// In lines mode every result is written as it arrives. In array mode
/// results are held until `flush()` and written as one JSON array.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    pending: Mutex<Option<Vec<AnalysisResult>>>,
    pretty: bool,
}

impl JsonOutput {
    /// Creates a JSON Lines output writing to the given writer.
    #[must_use]
    pub fn lines(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            pending: Mutex::new(None),
            pretty: false,
        }
    }

    /// Creates a JSON array output writing to the given writer.
    #[must_use]
    pub fn array(writer: Box<dyn Write + Send>, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            pending: Mutex::new(Some(Vec::new())),
            pretty,
        }
    }

    /// Writes a batch of results as a JSON array.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write_array(&self, results: &[AnalysisResult]) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

impl ResultOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, result: &AnalysisResult) -> Result<()> {
        {
            let mut pending = self
                .pending
                .lock()
                .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
            if let Some(batch) = pending.as_mut() {
                batch.push(result.clone());
                return Ok(());
            }
        }

        let json = serde_json::to_string(result)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let batch = self
            .pending
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?
            .take();
        if let Some(batch) = batch {
            self.write_array(&batch)?;
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
