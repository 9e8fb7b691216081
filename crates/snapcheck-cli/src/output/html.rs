//! HTML output adapter.
//!
//! Emits one fragment per report: the text report in a `<pre>` block
//! plus a base64 data-URI download link, so the output can be dropped
//! into any page without a server round trip.

use anyhow::Result;
use snapcheck_core::{report, AnalysisReport, ReportOutput};
use std::io::{self, Write};
use std::sync::Mutex;

/// HTML fragment output adapter.
pub struct HtmlOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl HtmlOutput {
    /// Creates an HTML output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }
}

/// Escapes text for embedding in HTML content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl ReportOutput for HtmlOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, analysis: &AnalysisReport) -> Result<()> {
        let text = report::render_text(analysis);
        let link = report::download_link(&text, "report.txt");

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "<div class=\"snapcheck-report\">")?;
        writeln!(writer, "<h2>{}</h2>", escape(&analysis.path))?;
        writeln!(writer, "<pre>{}</pre>", escape(&text))?;
        writeln!(writer, "{link}")?;
        writeln!(writer, "</div>")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
