//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumb trails.

use crate::models::TrailReport;

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const BRIGHT_YELLOW: &str = "\x1b[93m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_MAGENTA: &str = "\x1b[95m";

// Crumbs cycle through these by nesting depth.
const DEPTH_COLORS: [&str; 4] = [BRIGHT_YELLOW, BRIGHT_CYAN, BRIGHT_GREEN, BRIGHT_MAGENTA];

fn depth_color(depth: usize) -> &'static str {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

/// Format the joined trail with each crumb colored by depth.
pub fn format_trail_ansi(report: &TrailReport) -> String {
    if report.is_empty() {
        return format!("{}(no enclosing context){}", DIM, RESET);
    }

    report
        .crumbs
        .iter()
        .enumerate()
        .map(|(depth, crumb)| format!("{}{}{}", depth_color(depth), crumb.text, RESET))
        .collect::<Vec<_>>()
        .join(&format!("{}{}{}", DIM, report.separator, RESET))
}

/// Format the trail as a colored listing, one crumb per line with its
/// source position.
pub fn format_list_ansi(report: &TrailReport) -> String {
    if report.is_empty() {
        return format!("{}(no enclosing context){}\n", DIM, RESET);
    }

    let mut output = String::new();
    for (depth, crumb) in report.crumbs.iter().enumerate() {
        output.push_str(&format!(
            "{}{:>6}:{}{}  {}{}{}{}\n",
            DIM,
            crumb.row + 1,
            crumb.indent,
            RESET,
            BOLD,
            depth_color(depth),
            crumb.text,
            RESET
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breadcrumb;
    use std::path::PathBuf;

    fn report() -> TrailReport {
        TrailReport::new(
            PathBuf::from("test.py"),
            4,
            vec![
                Breadcrumb::new("class A:", 0, 0),
                Breadcrumb::new("def f(self):", 2, 4),
            ],
            " › ",
        )
    }

    #[test]
    fn test_trail_contains_crumbs_and_separator() {
        let out = format_trail_ansi(&report());
        assert!(out.contains("class A:"));
        assert!(out.contains("def f(self):"));
        assert!(out.contains(" › "));
    }

    #[test]
    fn test_empty_trail_placeholder() {
        let empty = TrailReport::new(PathBuf::from("t.py"), 0, vec![], " › ");
        assert!(format_trail_ansi(&empty).contains("no enclosing context"));
    }

    #[test]
    fn test_list_shows_positions() {
        let out = format_list_ansi(&report());
        assert!(out.contains("1:0"));
        assert!(out.contains("3:4"));
    }
}
