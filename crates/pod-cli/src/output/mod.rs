//! Output formatting for CLI.

mod arff;
mod json;
mod progress;
mod text;

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use pod_core::{Label, ResultOutput};

pub use arff::ArffOutput;
pub use json::JsonOutput;
pub use progress::ProgressBar;
pub use text::TextOutput;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
    /// One `<path> => <label>` line per image
    Text,
    /// ARFF training table
    Arff,
}

impl OutputFormat {
    /// Parses a config file value.
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "jsonl" => Some(Self::Jsonl),
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            "arff" => Some(Self::Arff),
            _ => None,
        }
    }
}

/// Builds the result output for `format`.
///
/// `pretty` only affects [`OutputFormat::Json`]; `label` only affects
/// [`OutputFormat::Arff`].
///
/// # Errors
///
/// Returns an error if the output preamble cannot be written.
pub fn build(
    format: OutputFormat,
    pretty: bool,
    label: Option<Label>,
    writer: Box<dyn Write + Send>,
) -> Result<Box<dyn ResultOutput>> {
    Ok(match format {
        OutputFormat::Jsonl => Box::new(JsonOutput::lines(writer)),
        OutputFormat::Json => Box::new(JsonOutput::array(writer, pretty)),
        OutputFormat::Text => Box::new(TextOutput::new(writer)),
        OutputFormat::Arff => Box::new(ArffOutput::new(writer, label)?),
    })
}

#[cfg(test)]
pub mod testing {
    //! Shared fixtures for output adapter tests.

    use std::io::{self, Write};
    use std::sync::{Arc, Mutex, PoisonError};

    use pod_core::{AnalysisResult, Classification, FeatureVector, ImageDimensions};

    /// In-memory writer whose contents stay readable after it is boxed.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Result for the black and white 2x2 image, optionally classified as a drawing.
    pub fn sample_result(path: &str, classified: bool) -> AnalysisResult {
        AnalysisResult {
            path: path.into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            dimensions: ImageDimensions::new(2, 2),
            features: FeatureVector::new(0.781_25, 50.0, 50.0),
            classification: classified.then(|| Classification::from_distribution([0.1, 0.9])),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::testing::{sample_result, SharedBuffer};
    use super::*;

    #[test]
    fn test_from_config() {
        assert_eq!(OutputFormat::from_config("arff"), Some(OutputFormat::Arff));
        assert_eq!(OutputFormat::from_config("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_config("xml"), None);
    }

    #[test]
    fn test_build_each_format() {
        for format in [
            OutputFormat::Jsonl,
            OutputFormat::Json,
            OutputFormat::Text,
            OutputFormat::Arff,
        ] {
            let buffer = SharedBuffer::default();
            let output = build(format, false, None, Box::new(buffer.clone())).unwrap();
            output.write(&sample_result("x.png", true)).unwrap();
            output.flush().unwrap();

            assert!(buffer.contents().contains("x.png"), "{format:?}");
        }
    }
}
