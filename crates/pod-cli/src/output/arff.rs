//! ARFF training table output.
//!
//! Writes the attribute-relation layout expected by common machine learning
//! toolkits, so a labelled image set can be turned into training data:
//!
//! ```text
//! @relation photo-or-drawing
//!
//! @attribute pct05pc numeric
//! @attribute pct2pk numeric
//! @attribute absdiff numeric
//! @attribute class {photo,drawing}
//!
//! @data
//! % scans/cat.png
//! 0.78125,50,50,drawing
//! ```

use anyhow::Result;
use pod_adapters::model::FEATURE_NAMES;
use pod_core::{AnalysisResult, Label, ResultOutput};
use std::io::Write;
use std::sync::Mutex;

/// Relation name in the ARFF header.
const RELATION: &str = "photo-or-drawing";

/// Marker for an unknown class value.
const MISSING: &str = "?";

/// ARFF output adapter.
pub struct ArffOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    label: Option<Label>,
}

impl ArffOutput {
    /// Creates an ARFF output and writes the header.
    ///
    /// `label` fills the class column for rows without a prediction.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: Box<dyn Write + Send>, label: Option<Label>) -> Result<Self> {
        write_header(&mut writer)?;
        Ok(Self {
            writer: Mutex::new(writer),
            label,
        })
    }

    fn class_value(&self, result: &AnalysisResult) -> &'static str {
        result
            .classification
            .map(|c| c.label)
            .or(self.label)
            .map_or(MISSING, Label::as_str)
    }
}

fn write_header(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "@relation {RELATION}")?;
    writeln!(writer)?;
    for name in FEATURE_NAMES {
        writeln!(writer, "@attribute {name} numeric")?;
    }
    let classes: Vec<_> = Label::ALL.iter().map(|l| l.as_str()).collect();
    writeln!(writer, "@attribute class {{{}}}", classes.join(","))?;
    writeln!(writer)?;
    writeln!(writer, "@data")?;
    Ok(())
}

impl ResultOutput for ArffOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, result: &AnalysisResult) -> Result<()> {
        let [pct05pc, pct2pk, absdiff] = result.features.to_array();
        let class = self.class_value(result);
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "% {}", result.path)?;
        writeln!(writer, "{pct05pc},{pct2pk},{absdiff},{class}")?;
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
