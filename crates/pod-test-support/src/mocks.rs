//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use pod_core::{
    AnalysisResult, Classifier, FeatureVector, ImageInfo, ImageSource, ProgressEvent,
    ProgressSink, ResultOutput,
};

/// Mock implementation of `ImageSource` for testing.
///
/// Yields pre-built images, optionally interleaved with load failures, and
/// tracks iteration for assertions.
pub struct MockImageSource {
    entries: Vec<Result<ImageInfo, String>>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockImageSource {
    /// Creates a new mock source with the given images.
    #[must_use]
    pub fn new(images: Vec<ImageInfo>) -> Self {
        Self {
            entries: images.into_iter().map(Ok).collect(),
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Appends an entry that fails to load with `message`.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.entries.push(Err(message.into()));
        self
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageSource for MockImageSource {
    fn images(&self) -> Box<dyn Iterator<Item = anyhow::Result<ImageInfo>> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(self.entries.iter().map(|entry| match entry {
            Ok(info) => Ok(info.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

/// Mock implementation of `ResultOutput` for testing.
///
/// Captures results for later assertions.
pub struct MockResultOutput {
    results: Arc<Mutex<Vec<AnalysisResult>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockResultOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured results.
    #[must_use]
    pub fn results(&self) -> Vec<AnalysisResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockResultOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultOutput for MockResultOutput {
    fn write(&self, result: &AnalysisResult) -> anyhow::Result<()> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Started { .. }))
            .count()
    }

    /// Returns the number of `Completed` events.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Completed { .. }))
            .count()
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Skipped { .. }))
            .count()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished { processed, skipped } => Some((*processed, *skipped)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

type Respond = dyn Fn(&FeatureVector) -> anyhow::Result<[f64; 2]> + Send + Sync;

/// Stub implementation of `Classifier` for testing.
///
/// Answers with a scripted distribution and records every feature vector it
/// was asked about.
pub struct StubClassifier {
    respond: Box<Respond>,
    calls: Arc<Mutex<Vec<FeatureVector>>>,
}

impl StubClassifier {
    /// Creates a stub that always returns `distribution`.
    #[must_use]
    pub fn fixed(distribution: [f64; 2]) -> Self {
        Self::from_fn(move |_| Ok(distribution))
    }

    /// Creates a stub that answers through `respond`.
    #[must_use]
    pub fn from_fn(
        respond: impl Fn(&FeatureVector) -> anyhow::Result<[f64; 2]> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a stub that fails every call with `message`.
    #[must_use]
    pub fn failing(message: &'static str) -> Self {
        Self::from_fn(move |_| Err(anyhow::anyhow!(message)))
    }

    /// Returns the feature vectors seen so far.
    #[must_use]
    pub fn calls(&self) -> Vec<FeatureVector> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Classifier for StubClassifier {
    fn distribution_for_instance(&self, features: &FeatureVector) -> anyhow::Result<[f64; 2]> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*features);
        (self.respond)(features)
    }
}
