//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use snapcheck_core::domain::{AnalysisReport, Detection, ImageInfo};
use snapcheck_core::ports::{
    ImageSource, ObjectDetector, ProgressEvent, ProgressSink, ReportOutput,
};

/// Mock implementation of `ImageSource` for testing.
///
/// Yields pre-built images and tracks iteration for assertions.
pub struct MockImageSource {
    images: Vec<ImageInfo>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockImageSource {
    /// Creates a new mock source with the given images.
    #[must_use]
    pub fn new(images: Vec<ImageInfo>) -> Self {
        Self {
            images,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
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
        Box::new(self.images.iter().cloned().map(Ok))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.images.len())
    }
}

/// Mock implementation of `ObjectDetector` for testing.
///
/// Returns a fixed detection list, or fails on demand to exercise the
/// degraded quality-only path.
pub struct MockDetector {
    detections: Vec<Detection>,
    fail: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockDetector {
    /// Creates a detector returning the given detections for every image.
    #[must_use]
    pub fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            fail: false,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a detector whose `detect` call always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            detections: vec![],
            fail: true,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns the number of times `detect` was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self
            .call_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ObjectDetector for MockDetector {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn detect(&self, _image: &ImageInfo) -> anyhow::Result<Vec<Detection>> {
        if let Ok(mut c) = self.call_count.lock() {
            *c += 1;
        }
        if self.fail {
            anyhow::bail!("mock detector failure");
        }
        Ok(self.detections.clone())
    }
}

/// Mock implementation of `ReportOutput` for testing.
///
/// Captures reports for later assertions. Clones share the captured
/// state, so a clone can be handed to the pipeline while the original
/// is kept for assertions.
#[derive(Clone)]
pub struct MockReportOutput {
    reports: Arc<Mutex<Vec<AnalysisReport>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockReportOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured reports.
    #[must_use]
    pub fn reports(&self) -> Vec<AnalysisReport> {
        self.reports
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

impl Default for MockReportOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportOutput for MockReportOutput {
    fn write(&self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report.clone());
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
/// Captures events for later assertions. Clones share the captured
/// state.
#[derive(Clone)]
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
