//! YAML output formatter

use crate::models::TrailReport;
use crate::output::FormatError;

/// Format a trail report as YAML.
pub fn format_yaml(report: &TrailReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breadcrumb;
    use std::path::PathBuf;

    #[test]
    fn test_format_yaml() {
        let report = TrailReport::new(
            PathBuf::from("test.py"),
            4,
            vec![Breadcrumb::new("def hello():", 1, 0)],
            " › ",
        );

        let yaml = format_yaml(&report).unwrap();
        assert!(yaml.contains("trail:"));
        assert!(yaml.contains("crumbs:"));
        assert!(yaml.contains("hello"));
    }
}
