//! Image source port for loading decoded images.

use crate::domain::ImageInfo;

/// Port for producing decoded images.
///
/// Format parsing (JPEG/PNG/...) lives behind this boundary; the
/// evaluator never touches file bytes.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over decoded images from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if an image fails to decode.
    fn images(&self) -> Box<dyn Iterator<Item = anyhow::Result<ImageInfo>> + Send + '_>;

    /// Returns the total number of images, if known.
    fn count_hint(&self) -> Option<usize>;
}
