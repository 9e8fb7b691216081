//! Object detection port.
//!
//! Detection is an external, optional collaborator. The pipeline
//! receives an `Option<&dyn ObjectDetector>` decided once at startup;
//! there is no runtime capability probing in the analysis path.

use crate::domain::{Detection, ImageInfo};

/// Port for an external object-recognition collaborator.
pub trait ObjectDetector: Send + Sync {
    /// Returns the name of this detector.
    fn name(&self) -> &'static str;

    /// Detects objects in an image.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails. A failure degrades the
    /// analysis to a quality-only report; it never aborts the batch.
    fn detect(&self, image: &ImageInfo) -> anyhow::Result<Vec<Detection>>;
}
