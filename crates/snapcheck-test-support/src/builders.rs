//! Synthetic image builders for testing.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use snapcheck_core::domain::ImageInfo;

/// Builder for creating synthetic test images.
///
/// Each builder produces an image with known brightness/dispersion so
/// tests can assert exact evaluator output.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// Creates a uniform grayscale image.
    ///
    /// Brightness equals `value`, dispersion is 0.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        ImageInfo::new("synthetic://uniform_gray", DynamicImage::ImageLuma8(img))
    }

    /// Creates a uniform RGB image.
    ///
    /// Brightness is the mean of the three channel values.
    #[must_use]
    pub fn uniform_rgb(width: u32, height: u32, rgb: [u8; 3]) -> ImageInfo {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb(rgb));
        ImageInfo::new("synthetic://uniform_rgb", DynamicImage::ImageRgb8(img))
    }

    /// Creates a single black pixel.
    #[must_use]
    pub fn single_black_pixel() -> ImageInfo {
        Self::uniform_gray(1, 1, 0)
    }

    /// Creates a high-contrast checkerboard.
    ///
    /// With even dimensions the black/white split is exact, giving
    /// brightness 127.5 and dispersion 127.5 (well clear of both
    /// thresholds).
    #[must_use]
    pub fn checkerboard(width: u32, height: u32) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        ImageInfo::new("synthetic://checkerboard", DynamicImage::ImageLuma8(img))
    }

    /// Creates a smooth horizontal gradient from 0 to 255.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Luma([val])
        });
        ImageInfo::new(
            "synthetic://horizontal_gradient",
            DynamicImage::ImageLuma8(img),
        )
    }

    /// Creates a dark image with slight variation.
    ///
    /// Flags low lighting without having zero dispersion.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn dark_image(width: u32, height: u32, max_brightness: u8) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, y| {
            let val = ((x + y) % u32::from(max_brightness.max(1))) as u8;
            Luma([val])
        });
        ImageInfo::new("synthetic://dark", DynamicImage::ImageLuma8(img))
    }
}
