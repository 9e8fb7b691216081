//! Snapcheck Core - Domain logic and quality heuristics
//!
//! This crate contains the core domain types, the quality heuristic
//! evaluator, report rendering, and the port traits that adapters
//! implement.

pub mod domain;
pub mod ports;
pub mod quality;
pub mod report;

pub use domain::{
    AnalysisReport, Detection, EvalError, ImageDimensions, ImageInfo, ObjectCount, QualityReport,
};
pub use ports::{ImageSource, ObjectDetector, ProgressEvent, ProgressSink, ReportOutput};
pub use quality::{QualityConfig, QualityEvaluator};
