//! Report presentation.
//!
//! The text format is what operators and their scripts have always grepped
//! for, one diagnostic per line followed by a `Finished.` summary. The JSON
//! format carries the same information as a single document.

use std::io::Write;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use crate::validator::{Report, Severity, Summary};

/// First line printed before a check starts
pub fn header_line(path: &Path) -> String {
    format!("Checking node file {}", path.display())
}

/// Last line printed after a completed check
pub fn summary_line(summary: &Summary) -> String {
    format!(
        "Finished. {} nodes, {} errors, {} warnings",
        summary.node_count, summary.error_count, summary.warning_count
    )
}

/// Write diagnostics and the summary line as console text
pub fn write_text<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    for diagnostic in &report.diagnostics {
        writeln!(out, "{}", diagnostic).context("Failed to write diagnostic")?;
    }
    writeln!(out, "{}", summary_line(&report.summary)).context("Failed to write summary")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonDiagnostic {
    severity: Severity,
    line: usize,
    message: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    #[serde(flatten)]
    summary: &'a Summary,
    exit_code: u8,
    diagnostics: Vec<JsonDiagnostic>,
}

impl<'a> JsonReport<'a> {
    fn new(report: &'a Report) -> Self {
        Self {
            file: report.source.display().to_string(),
            summary: &report.summary,
            exit_code: report.outcome().exit_code(),
            diagnostics: report
                .diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    severity: d.severity(),
                    line: d.line,
                    message: d.message(),
                })
                .collect(),
        }
    }
}

/// Render the report as a pretty-printed JSON document
pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(report)).context("Failed to serialize report to JSON")
}

/// Write the report as JSON
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let json = to_json(report)?;
    writeln!(out, "{}", json).context("Failed to write JSON report")?;
    Ok(())
}
