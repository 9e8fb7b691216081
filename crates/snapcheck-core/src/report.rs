//! Report rendering.
//!
//! Owns the human-readable text layout and the merge of quality
//! heuristics with detector output. Output adapters decide where the
//! rendered text goes.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::{AnalysisReport, Detection, ObjectCount};

/// Aggregates raw detections into a ranked label list.
///
/// Labels are ordered by count descending, ties broken by label
/// ascending.
#[must_use]
pub fn summarize_detections(detections: &[Detection]) -> Vec<ObjectCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for detection in detections {
        *counts.entry(detection.label.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<ObjectCount> = counts
        .into_iter()
        .map(|(label, count)| ObjectCount {
            label: label.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked
}

/// Renders the text report for a single image.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut text = format!(
        "Brightness: {:.2}\nFocus: {:.2}\nFeedback: {}",
        report.quality.brightness,
        report.quality.dispersion,
        report.quality.feedback.join(", ")
    );

    if let Some(detections) = &report.detections {
        text.push_str("\n\nDetected Objects:\n");
        let lines: Vec<String> = detections
            .iter()
            .map(|d| format!("{}: {}", d.label, d.count))
            .collect();
        text.push_str(&lines.join("\n"));
    }

    text
}

/// Builds an HTML anchor carrying the report as a base64 data URI.
///
/// Lets a browser download the report without any server round trip.
#[must_use]
pub fn download_link(text: &str, filename: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("<a href=\"data:file/txt;base64,{encoded}\" download=\"{filename}\">Download Report</a>")
}
