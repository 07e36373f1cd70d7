//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI, and plain
//! summary output of trail reports.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::{format_list_ansi, format_trail_ansi};
pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::TrailReport;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// The bare joined trail
    #[default]
    Summary,
}

/// Format a trail report in the specified format.
pub fn format_report(report: &TrailReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Yaml => format_yaml(report),
        OutputFormat::Ansi => Ok(format_trail_ansi(report)),
        OutputFormat::Summary => Ok(report.trail.clone()),
    }
}

/// Format a report as one breadcrumb per line with its source position,
/// the listing counterpart of the joined trail.
pub fn format_list(report: &TrailReport, ansi: bool) -> String {
    if ansi {
        return format_list_ansi(report);
    }

    if report.is_empty() {
        return "(no enclosing context)\n".to_string();
    }

    let mut output = String::new();
    for crumb in &report.crumbs {
        output.push_str(&format!(
            "{}:{}  {}\n",
            crumb.row + 1,
            crumb.indent,
            crumb.text
        ));
    }
    output
}
