//! Test support utilities for snapcheck.
//!
//! Provides mocks and synthetic image builders for testing the
//! analysis pipeline without real photo fixtures.
//!
//! # Example
//!
//! ```
//! use snapcheck_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! let dark = SyntheticImageBuilder::uniform_gray(64, 64, 20);
//! let clear = SyntheticImageBuilder::checkerboard(64, 64);
//!
//! let source = MockImageSource::new(vec![dark, clear]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockDetector, MockImageSource, MockProgressSink, MockReportOutput};
