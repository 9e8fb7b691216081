//! Report output port for writing analysis reports.

use crate::domain::AnalysisReport;

/// Port for emitting analysis reports.
pub trait ReportOutput: Send + Sync {
    /// Writes a single analysis report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, report: &AnalysisReport) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
