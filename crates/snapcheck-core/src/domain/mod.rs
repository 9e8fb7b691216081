//! Core domain types for image quality analysis.

mod error;
mod image;
mod report;

pub use error::EvalError;
pub use image::{ImageDimensions, ImageInfo};
pub use report::{AnalysisReport, Detection, ObjectCount, QualityReport};
