//! Analyze command - evaluate image quality and render reports.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use snapcheck_adapters::FsImageSource;
use snapcheck_core::{
    report::summarize_detections, AnalysisReport, ImageSource, ObjectDetector, ProgressEvent,
    ProgressSink, QualityConfig, QualityEvaluator, ReportOutput,
};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{HtmlOutput, JsonOutput, ProgressBar, TextOutput};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Single JSON array
    Json,
    /// HTML fragment with a download link per report
    Html,
}

/// Parse and validate a brightness threshold (0.0-255.0).
fn parse_level(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=255.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=255.0"))
    }
}

/// Parse and validate a dispersion threshold (non-negative).
fn parse_dispersion(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is negative"))
    }
}

/// Shared arguments for image analysis.
#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Brightness below this flags low lighting (0.0-255.0)
    #[arg(long, value_parser = parse_level)]
    pub low_light_threshold: Option<f64>,

    /// Dispersion below this flags a blurry image
    #[arg(long, value_parser = parse_dispersion)]
    pub dispersion_threshold: Option<f64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Also write the concatenated text report to a file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl AnalyzeArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Thresholds: CLI > config (accessor provides hardcoded fallback)
        args.low_light_threshold = args
            .low_light_threshold
            .or(config.quality.low_light_threshold);
        args.dispersion_threshold = args
            .dispersion_threshold
            .or(config.quality.dispersion_threshold);

        // Output format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "text" => Some(OutputFormat::Text),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    "json" => Some(OutputFormat::Json),
                    "html" => Some(OutputFormat::Html),
                    _ => None,
                });
        }

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args.config = Some(config.clone());

        args
    }

    /// Get low-light threshold with fallback to the heuristic default.
    fn low_light_threshold(&self) -> f64 {
        self.low_light_threshold
            .unwrap_or(snapcheck_core::quality::LOW_LIGHT_THRESHOLD)
    }

    /// Get dispersion threshold with fallback to the heuristic default.
    fn dispersion_threshold(&self) -> f64 {
        self.dispersion_threshold
            .unwrap_or(snapcheck_core::quality::DISPERSION_THRESHOLD)
    }

    /// Get output format with fallback to text.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Text)
    }
}

/// Result of running the analyze command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct AnalyzeResult {
    /// Number of images analyzed.
    pub processed: usize,
    /// Number of images skipped.
    pub skipped: usize,
    /// Number of images with flagged findings.
    pub flagged: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the analyze command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    info!("Running analyze command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let evaluator = QualityEvaluator::new(QualityConfig {
        low_light_threshold: args.low_light_threshold(),
        dispersion_threshold: args.dispersion_threshold(),
    });
    debug!(
        "Thresholds: low_light={}, dispersion={}",
        args.low_light_threshold(),
        args.dispersion_threshold()
    );

    // Detection capability is decided here, once, and injected.
    let detector = build_detector();
    if detector.is_none() {
        info!("Object detection unavailable; reporting quality heuristics only");
    }

    let mut outputs: Vec<Box<dyn ReportOutput>> = vec![match args.format() {
        OutputFormat::Text => Box::new(TextOutput::stdout()),
        OutputFormat::Jsonl => Box::new(JsonOutput::lines()),
        OutputFormat::Json => Box::new(JsonOutput::array(args.pretty)),
        OutputFormat::Html => Box::new(HtmlOutput::stdout()),
    }];

    if let Some(path) = &args.report {
        let file = TextOutput::file(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        outputs.push(Box::new(file));
    }

    process_images(
        &source,
        &evaluator,
        detector.as_deref(),
        &outputs,
        &progress_bar,
    )
}

/// Returns the object-detection collaborator, if one is available.
///
/// No detector ships with this build; the analysis pipeline accepts
/// one through its `Option` parameter.
fn build_detector() -> Option<Box<dyn ObjectDetector>> {
    None
}

/// Process images through the evaluator and optional detector.
pub fn process_images(
    source: &dyn ImageSource,
    evaluator: &QualityEvaluator,
    detector: Option<&dyn ObjectDetector>,
    outputs: &[Box<dyn ReportOutput>],
    progress: &dyn ProgressSink,
) -> Result<AnalyzeResult> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut flagged = 0usize;

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                // Error message carries the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let path = image.path.clone();

        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        let quality = match evaluator.evaluate(&image) {
            Ok(q) => q,
            Err(e) => {
                warn!("Evaluation failed for {path}: {e}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        // Detector failure degrades to a quality-only report
        let detections = detector.and_then(|d| match d.detect(&image) {
            Ok(found) => Some(summarize_detections(&found)),
            Err(e) => {
                warn!("Detector {} failed for {}: {}", d.name(), path, e);
                None
            }
        });

        if quality.is_flagged() {
            flagged += 1;
        }

        let report = AnalysisReport {
            path,
            timestamp: iso_timestamp(),
            dimensions: image.dimensions(),
            quality,
            detections,
        };

        progress.on_event(ProgressEvent::Completed {
            report: report.clone(),
        });

        for output in outputs {
            output.write(&report)?;
        }

        processed += 1;
    }

    for output in outputs {
        output.flush()?;
    }

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    let exit_code = if flagged > 0 {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    };

    Ok(AnalyzeResult {
        processed,
        skipped,
        flagged,
        exit_code,
    })
}

/// Generate an RFC 3339 UTC timestamp.
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
