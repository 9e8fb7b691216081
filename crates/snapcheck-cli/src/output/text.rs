//! Text report output adapter.

use anyhow::Result;
use snapcheck_core::{report, AnalysisReport, ReportOutput};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Writes human-readable text reports, one block per image.
pub struct TextOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    /// Set after the first report so blocks are blank-line separated.
    wrote_any: Mutex<bool>,
}

impl TextOutput {
    /// Creates a text output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a text output writing to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(Box::new(BufWriter::new(file))))
    }

    /// Creates a text output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            wrote_any: Mutex::new(false),
        }
    }
}

impl ReportOutput for TextOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, report: &AnalysisReport) -> Result<()> {
        let text = report::render_text(report);
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        let mut wrote_any = self
            .wrote_any
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        if *wrote_any {
            writeln!(writer)?;
        }
        writeln!(writer, "{}:", report.path)?;
        writeln!(writer, "{text}")?;
        *wrote_any = true;
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
