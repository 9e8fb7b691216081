//! Quality heuristic evaluator.
//!
//! Computes brightness (mean) and dispersion (population standard
//! deviation) over the flattened sample set of an image and derives
//! qualitative feedback from fixed thresholds. Dispersion is a cheap
//! stand-in for sharpness; there is no edge-detection or
//! frequency-domain analysis here.

use tracing::trace;

use crate::domain::{EvalError, ImageInfo, QualityReport};

/// Brightness below this value flags low lighting.
pub const LOW_LIGHT_THRESHOLD: f64 = 50.0;

/// Dispersion below this value flags a blurry image.
pub const DISPERSION_THRESHOLD: f64 = 10.0;

/// Configuration for the quality evaluator.
///
/// Defaults match the documented heuristic thresholds.
#[derive(Debug, Clone)]
pub struct QualityConfig {
    /// Brightness threshold for the low-lighting finding (0-255).
    pub low_light_threshold: f64,
    /// Dispersion threshold for the blurry finding.
    pub dispersion_threshold: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            low_light_threshold: LOW_LIGHT_THRESHOLD,
            dispersion_threshold: DISPERSION_THRESHOLD,
        }
    }
}

/// 256-bin histogram over 8-bit samples.
///
/// All channel values of all pixels land in the same bins; grayscale
/// and color images are treated identically once flattened.
#[derive(Debug, Clone)]
pub struct SampleHistogram {
    bins: [u64; 256],
    total: u64,
}

impl SampleHistogram {
    /// Builds a histogram from a flattened sample set.
    #[must_use]
    pub fn from_samples(samples: &[u8]) -> Self {
        let mut bins = [0u64; 256];
        for &sample in samples {
            bins[usize::from(sample)] += 1;
        }
        Self {
            bins,
            total: samples.len() as u64,
        }
    }

    /// Returns the total sample count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Arithmetic mean of the samples.
    ///
    /// Returns 0.0 for an empty histogram; callers that need the empty
    /// case surfaced should check `total()` first.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64) * count)
            .sum();
        sum as f64 / self.total as f64
    }

    /// Population standard deviation of the samples.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let diff = (i as f64) - mean;
                diff * diff * (count as f64)
            })
            .sum::<f64>()
            / (self.total as f64);
        variance.sqrt()
    }
}

/// Evaluates a flattened sample set against the configured thresholds.
///
/// Pure and deterministic; evaluating the same samples twice yields
/// bit-identical results.
///
/// # Errors
///
/// Returns [`EvalError::InvalidInput`] if `samples` is empty.
pub fn evaluate_samples(samples: &[u8], config: &QualityConfig) -> Result<QualityReport, EvalError> {
    if samples.is_empty() {
        return Err(EvalError::InvalidInput);
    }

    let histogram = SampleHistogram::from_samples(samples);
    let brightness = histogram.mean();
    let dispersion = histogram.std_dev();
    trace!(samples = histogram.total(), brightness, dispersion);

    // Findings are independently appendable, in fixed order.
    let mut feedback = Vec::new();
    if brightness < config.low_light_threshold {
        feedback.push(QualityReport::LOW_LIGHT.to_string());
    }
    if dispersion < config.dispersion_threshold {
        feedback.push(QualityReport::BLURRY.to_string());
    }
    if feedback.is_empty() {
        feedback.push(QualityReport::ALL_CLEAR.to_string());
    }

    Ok(QualityReport {
        brightness,
        dispersion,
        feedback,
    })
}

/// Quality heuristic evaluator.
pub struct QualityEvaluator {
    config: QualityConfig,
}

impl QualityEvaluator {
    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub const fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Returns the evaluator configuration.
    #[must_use]
    pub const fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Evaluates an image's flattened sample set.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidInput`] if the image has no samples.
    pub fn evaluate(&self, image: &ImageInfo) -> Result<QualityReport, EvalError> {
        evaluate_samples(image.samples(), &self.config)
    }
}

impl Default for QualityEvaluator {
    fn default() -> Self {
        Self::new(QualityConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::domain::ImageInfo;
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

    fn uniform_gray(width: u32, height: u32, value: u8) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        ImageInfo::new("synthetic://uniform", DynamicImage::ImageLuma8(img))
    }

    #[test]
    fn test_default_config_matches_thresholds() {
        let config = QualityConfig::default();
        assert_eq!(config.low_light_threshold, 50.0);
        assert_eq!(config.dispersion_threshold, 10.0);
    }

    #[test]
    fn test_empty_samples_rejected() {
        let result = evaluate_samples(&[], &QualityConfig::default());
        assert_eq!(result.unwrap_err(), EvalError::InvalidInput);
    }

    #[test]
    fn test_uniform_image_statistics() {
        // All samples equal v: brightness == v, dispersion == 0
        for v in [0u8, 49, 50, 128, 200, 255] {
            let info = uniform_gray(16, 16, v);
            let report = QualityEvaluator::default().evaluate(&info).unwrap();
            assert_eq!(report.brightness, f64::from(v));
            assert_eq!(report.dispersion, 0.0);
            assert!(report.feedback.contains(&QualityReport::BLURRY.to_string()));
        }
    }

    #[test]
    fn test_single_black_pixel_boundary() {
        let info = uniform_gray(1, 1, 0);
        let report = QualityEvaluator::default().evaluate(&info).unwrap();

        assert_eq!(report.brightness, 0.0);
        assert_eq!(report.dispersion, 0.0);
        assert_eq!(
            report.feedback,
            vec![
                QualityReport::LOW_LIGHT.to_string(),
                QualityReport::BLURRY.to_string()
            ]
        );
    }

    #[test]
    fn test_uniform_200_blurry_only() {
        let info = uniform_gray(32, 32, 200);
        let report = QualityEvaluator::default().evaluate(&info).unwrap();

        assert_eq!(report.brightness, 200.0);
        assert_eq!(report.dispersion, 0.0);
        assert_eq!(report.feedback, vec![QualityReport::BLURRY.to_string()]);
    }

    #[test]
    fn test_low_light_boundary_is_strict() {
        // brightness == 50.0 is not below the threshold
        let at = QualityEvaluator::default()
            .evaluate(&uniform_gray(8, 8, 50))
            .unwrap();
        assert!(!at.feedback.contains(&QualityReport::LOW_LIGHT.to_string()));

        let below = QualityEvaluator::default()
            .evaluate(&uniform_gray(8, 8, 49))
            .unwrap();
        assert!(below.feedback.contains(&QualityReport::LOW_LIGHT.to_string()));
    }

    #[test]
    fn test_all_clear_when_no_condition_triggers() {
        // Half 0, half 255: mean 127.5, dispersion 127.5
        let img = GrayImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        let info = ImageInfo::new("synthetic://split", DynamicImage::ImageLuma8(img));
        let report = QualityEvaluator::default().evaluate(&info).unwrap();

        assert_eq!(report.brightness, 127.5);
        assert_eq!(report.dispersion, 127.5);
        assert_eq!(report.feedback, vec![QualityReport::ALL_CLEAR.to_string()]);
        assert!(!report.is_flagged());
    }

    #[test]
    fn test_color_image_flattened_without_weighting() {
        // RGB (10, 20, 30) everywhere: mean of flattened channels is 20
        let img = RgbImage::from_fn(8, 8, |_, _| Rgb([10u8, 20, 30]));
        let info = ImageInfo::new("synthetic://rgb", DynamicImage::ImageRgb8(img));
        let report = QualityEvaluator::default().evaluate(&info).unwrap();

        assert_eq!(report.brightness, 20.0);
        assert!(report.feedback.contains(&QualityReport::LOW_LIGHT.to_string()));
    }

    #[test]
    fn test_brightness_and_dispersion_ranges() {
        let img = GrayImage::from_fn(256, 4, |x, _| Luma([u8::try_from(x % 256).unwrap()]));
        let info = ImageInfo::new("synthetic://ramp", DynamicImage::ImageLuma8(img));
        let report = QualityEvaluator::default().evaluate(&info).unwrap();

        assert!(report.brightness >= 0.0 && report.brightness <= 255.0);
        assert!(report.dispersion >= 0.0);
        assert!(!report.feedback.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let info = uniform_gray(32, 32, 37);
        let evaluator = QualityEvaluator::default();
        let first = evaluator.evaluate(&info).unwrap();
        let second = evaluator.evaluate(&info).unwrap();

        assert_eq!(first.brightness.to_bits(), second.brightness.to_bits());
        assert_eq!(first.dispersion.to_bits(), second.dispersion.to_bits());
        assert_eq!(first.feedback, second.feedback);
    }

    #[test]
    fn test_custom_thresholds_change_findings() {
        // Dispersion 127.5 flagged blurry once the threshold exceeds it
        let img = GrayImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        let info = ImageInfo::new("synthetic://split", DynamicImage::ImageLuma8(img));

        let config = QualityConfig {
            low_light_threshold: 0.0,
            dispersion_threshold: 200.0,
        };
        let report = QualityEvaluator::new(config).evaluate(&info).unwrap();
        assert_eq!(report.feedback, vec![QualityReport::BLURRY.to_string()]);
    }

    #[test]
    fn test_histogram_statistics() {
        let samples = [0u8, 0, 255, 255];
        let hist = SampleHistogram::from_samples(&samples);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.mean(), 127.5);
        assert_eq!(hist.std_dev(), 127.5);
    }

    #[test]
    fn test_empty_histogram_defaults() {
        let hist = SampleHistogram::from_samples(&[]);
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.mean(), 0.0);
        assert_eq!(hist.std_dev(), 0.0);
    }
}
