//! Snapcheck Adapters - External adapters for snapcheck.
//!
//! Currently provides the filesystem image source, which handles
//! format parsing and hands decoded 8-bit images to the core.

pub mod fs;

pub use fs::FsImageSource;
