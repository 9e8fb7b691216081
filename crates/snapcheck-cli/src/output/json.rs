//! JSON output adapter.

use anyhow::Result;
use snapcheck_core::{AnalysisReport, ReportOutput};
use std::io::{self, Write};
use std::sync::Mutex;

/// Emission mode for JSON output.
enum Mode {
    /// One JSON object per line, written immediately.
    Lines,
    /// Reports buffered and emitted as a single array on flush.
    Array { pretty: bool, buffer: Vec<AnalysisReport> },
}

/// JSON output adapter writing to stdout.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    mode: Mutex<Mode>,
}

impl JsonOutput {
    /// Creates a JSON Lines output.
    #[must_use]
    pub fn lines() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            mode: Mutex::new(Mode::Lines),
        }
    }

    /// Creates a JSON array output; the array is written on `flush`.
    #[must_use]
    pub fn array(pretty: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            mode: Mutex::new(Mode::Array {
                pretty,
                buffer: Vec::new(),
            }),
        }
    }
}

impl ReportOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, report: &AnalysisReport) -> Result<()> {
        let mut mode = self
            .mode
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        match &mut *mode {
            Mode::Lines => {
                let json = serde_json::to_string(report)?;
                let mut writer = self
                    .writer
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
                writeln!(writer, "{json}")?;
            }
            Mode::Array { buffer, .. } => buffer.push(report.clone()),
        }
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mode = self
            .mode
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        if let Mode::Array { pretty, buffer } = &*mode {
            let json = if *pretty {
                serde_json::to_string_pretty(buffer)?
            } else {
                serde_json::to_string(buffer)?
            };
            writeln!(writer, "{json}")?;
        }

        writer.flush()?;
        Ok(())
    }
}
