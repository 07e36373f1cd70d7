//! JSON output formatter

use super::FormatError;
use crate::models::TrailReport;

/// Format a trail report as pretty-printed JSON.
pub fn format_json(report: &TrailReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breadcrumb;
    use std::path::PathBuf;

    #[test]
    fn test_json_roundtrip() {
        let report = TrailReport::new(
            PathBuf::from("a.py"),
            9,
            vec![Breadcrumb::new("def f():", 1, 0)],
            " › ",
        );

        let json = format_json(&report).unwrap();
        let parsed: TrailReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.trail, report.trail);
        assert_eq!(parsed.crumbs.len(), 1);
        assert_eq!(parsed.row, 9);
    }
}
