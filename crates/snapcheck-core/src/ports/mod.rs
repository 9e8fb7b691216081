//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and
//! external adapters: image decoding, object detection, report output,
//! and progress reporting.

mod detector;
mod image_source;
mod progress;
mod report_output;

pub use detector::ObjectDetector;
pub use image_source::ImageSource;
pub use progress::{ProgressEvent, ProgressSink};
pub use report_output::ReportOutput;
