//! Data models for breadcrumb trails
//!
//! This module defines the structures shared between the extractor, the
//! trimming pass, and the output formatters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One ancestor line in the indentation hierarchy above the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Extracted (possibly truncated) text fragment.
    pub text: String,

    /// Zero-based row the fragment was taken from.
    pub row: usize,

    /// Tab-expanded column of the line's first non-whitespace character.
    pub indent: usize,
}

impl Breadcrumb {
    /// Create a new breadcrumb.
    pub fn new(text: impl Into<String>, row: usize, indent: usize) -> Self {
        Self {
            text: text.into(),
            row,
            indent,
        }
    }

    /// Length of the fragment in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A computed trail for one cursor position, ready for output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailReport {
    /// Path of the buffer the trail was computed for.
    pub path: PathBuf,

    /// Zero-based cursor row.
    pub row: usize,

    /// Breadcrumbs, outermost ancestor first.
    pub crumbs: Vec<Breadcrumb>,

    /// The crumbs joined with the separator.
    pub trail: String,

    /// Separator used to join the trail.
    pub separator: String,

    /// Metadata about the computation.
    pub metadata: TrailMetadata,
}

impl TrailReport {
    /// Build a report, joining the crumbs with `separator`.
    pub fn new(path: PathBuf, row: usize, crumbs: Vec<Breadcrumb>, separator: &str) -> Self {
        let trail = crumbs
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(separator);

        Self {
            path,
            row,
            crumbs,
            trail,
            separator: separator.to_string(),
            metadata: TrailMetadata::default(),
        }
    }

    /// True when no enclosing context was found.
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Nesting depth of the cursor position.
    pub fn depth(&self) -> usize {
        self.crumbs.len()
    }
}

/// Metadata attached to a trail report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailMetadata {
    /// ISO timestamp of the computation.
    pub timestamp: String,

    /// Tool version.
    pub tool_version: String,
}

impl Default for TrailMetadata {
    fn default() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_joins_crumbs() {
        let report = TrailReport::new(
            PathBuf::from("test.py"),
            7,
            vec![
                Breadcrumb::new("class A:", 0, 0),
                Breadcrumb::new("def f(self):", 2, 4),
            ],
            " › ",
        );

        assert_eq!(report.trail, "class A: › def f(self):");
        assert_eq!(report.depth(), 2);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_empty_report() {
        let report = TrailReport::new(PathBuf::from("test.py"), 0, vec![], " › ");
        assert!(report.is_empty());
        assert_eq!(report.trail, "");
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let crumb = Breadcrumb::new("fn héllo()", 3, 2);
        assert_eq!(crumb.char_len(), 10);
    }
}
