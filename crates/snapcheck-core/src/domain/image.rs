//! Decoded image carrier types.

use serde::{Deserialize, Serialize};

/// Image dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A decoded image together with its origin path.
///
/// Produced by an image source adapter; treated as immutable for the
/// duration of analysis.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path (or synthetic identifier) of the image.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Creates an `ImageInfo` from a decoded image, reading dimensions
    /// from the pixel data.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        let width = image.width();
        let height = image.height();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Returns the image dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    /// The flattened sample set: every channel value of every pixel,
    /// row-major, channels interleaved.
    ///
    /// Grayscale and color images are treated identically once
    /// flattened; there is no per-channel weighting. Sources are
    /// expected to hand over 8-bit layouts (loaders normalize 16-bit
    /// inputs before constructing an `ImageInfo`).
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        self.image.as_bytes()
    }
}
