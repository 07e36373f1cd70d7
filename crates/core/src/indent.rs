//! Indentation measurement
//!
//! Converts the leading whitespace of a line into a visual column count,
//! consistent with how a tab-stop-aware buffer renders it. This is the
//! only notion of "structure" the extractor has; there is no parser.

/// Measure the visual column of the first non-whitespace character.
///
/// A tab advances the position to the next multiple of `tab_size`; any
/// other whitespace advances it by one. A line that is entirely
/// whitespace is measured to its full width. When `limit` is given the
/// scan stops as soon as the position reaches it, so comparisons against
/// a known threshold never pay for long indentation runs.
pub fn measure_indentation(line: &str, tab_size: usize, limit: Option<usize>) -> usize {
    let tab_size = tab_size.max(1);
    let mut pos = 0;

    for ch in line.chars() {
        if ch == '\t' {
            pos += tab_size - (pos % tab_size);
        } else if ch.is_whitespace() {
            pos += 1;
        } else {
            break;
        }

        if let Some(limit) = limit {
            if pos >= limit {
                break;
            }
        }
    }

    pos
}

/// True iff every character of the line is whitespace.
///
/// A zero-length line counts as blank.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_measure_one_to_one() {
        for n in 0..12 {
            let line = format!("{}x", " ".repeat(n));
            assert_eq!(measure_indentation(&line, 4, None), n);
        }
    }

    #[test]
    fn test_tabs_round_to_tab_stops() {
        assert_eq!(measure_indentation("\tx", 4, None), 4);
        assert_eq!(measure_indentation("\t\tx", 4, None), 8);
        assert_eq!(measure_indentation("\t x", 4, None), 5);
        // A space before the tab still lands on the next tab stop.
        assert_eq!(measure_indentation(" \tx", 4, None), 4);
        assert_eq!(measure_indentation("\tx", 8, None), 8);
    }

    #[test]
    fn test_blank_line_measured_to_full_width() {
        assert_eq!(measure_indentation("", 4, None), 0);
        assert_eq!(measure_indentation("   ", 4, None), 3);
        assert_eq!(measure_indentation("\t\t", 4, None), 8);
    }

    #[test]
    fn test_limit_stops_early() {
        assert_eq!(measure_indentation("        x", 4, Some(4)), 4);
        // The position may overshoot the limit by one tab stop.
        assert_eq!(measure_indentation("\t\tx", 8, Some(3)), 8);
        // Limit higher than the indentation changes nothing.
        assert_eq!(measure_indentation("  x", 4, Some(10)), 2);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\t"));
        assert!(is_blank(" \t \t "));
        assert!(!is_blank("  a  "));
        assert!(!is_blank("x"));
    }
}
