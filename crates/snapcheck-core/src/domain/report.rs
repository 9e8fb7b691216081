//! Analysis report value types.

use serde::{Deserialize, Serialize};

use super::ImageDimensions;

/// Quality heuristics for a single image.
///
/// Immutable value object; has no identity beyond its values. The
/// `feedback` list is never empty: when no condition triggers, the
/// all-clear message is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Arithmetic mean of all flattened samples, in [0, 255].
    pub brightness: f64,
    /// Population standard deviation of the flattened samples.
    ///
    /// Used as a crude sharpness/texture proxy, not a genuine blur
    /// metric.
    pub dispersion: f64,
    /// Qualitative findings, in evaluation order.
    pub feedback: Vec<String>,
}

impl QualityReport {
    /// Feedback for images darker than the low-light threshold.
    pub const LOW_LIGHT: &'static str = "Low lighting";
    /// Feedback for images with dispersion below the blur threshold.
    pub const BLURRY: &'static str = "Blurry image";
    /// Feedback when no condition triggered.
    pub const ALL_CLEAR: &'static str = "Image looks clear and well-lit";

    /// Whether any quality condition triggered.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.feedback.iter().any(|f| f != Self::ALL_CLEAR)
    }
}

/// A single detection from the object-detection collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected class label.
    pub label: String,
    /// Detection confidence (0.0 to 1.0).
    pub confidence: f32,
}

/// A detected class label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCount {
    /// Class label.
    pub label: String,
    /// Number of detections with this label.
    pub count: usize,
}

/// Complete analysis output for a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Path to the analyzed image.
    pub path: String,
    /// Timestamp of analysis (RFC 3339).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// Quality heuristics.
    pub quality: QualityReport,
    /// Ranked object counts, when a detector ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<ObjectCount>>,
}
