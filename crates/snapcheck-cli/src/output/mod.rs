//! Output adapters for the CLI.

mod html;
mod json;
mod progress;
mod text;

pub use html::HtmlOutput;
pub use json::JsonOutput;
pub use progress::ProgressBar;
pub use text::TextOutput;
