//! Fair trimming of breadcrumb trails
//!
//! Shrinks breadcrumbs so the joined trail fits a total character
//! budget. Rather than chopping from one end, the remaining budget is
//! split evenly across every crumb at or above the cutoff length, so
//! trimmed crumbs end up within one character of each other while
//! already-short crumbs are left alone.

use crate::models::Breadcrumb;

/// Trim crumbs in place so that
/// `sum(len) + crumbs.len() * separator_len <= total_length_limit`.
///
/// All lengths are counted in characters. Crumbs are only ever
/// shortened (prefix kept), never removed.
pub fn fair_trim(crumbs: &mut [Breadcrumb], separator_len: usize, total_length_limit: usize) {
    if crumbs.is_empty() {
        return;
    }

    let lengths: Vec<usize> = crumbs.iter().map(|c| c.char_len()).collect();
    let mut sorted_lengths = lengths.clone();
    sorted_lengths.sort_unstable();

    let mut remaining = total_length_limit.saturating_sub(crumbs.len() * separator_len);
    let mut previous_length = 0;

    for (shorter, &length) in sorted_lengths.iter().enumerate() {
        // Only evaluate each distinct length once; duplicates still
        // consume budget below.
        if previous_length < length {
            previous_length = length;
            let not_shorter = crumbs.len() - shorter;

            if remaining < length * not_shorter {
                // The budget cannot give every remaining crumb `length`
                // characters; split what is left evenly among them.
                let short_cut = remaining / not_shorter;
                let long_count = remaining % not_shorter;
                let mut short_left = not_shorter - long_count;

                for (i, crumb) in crumbs.iter_mut().enumerate() {
                    if lengths[i] >= length {
                        let cut = if short_left > 0 {
                            short_left -= 1;
                            short_cut
                        } else {
                            short_cut + 1
                        };
                        truncate_chars(&mut crumb.text, cut);
                    }
                }
                return;
            }
        }

        remaining = remaining.saturating_sub(length);
    }
}

/// Truncate a string to at most `max_chars` characters, keeping the prefix.
pub(crate) fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(texts: &[&str]) -> Vec<Breadcrumb> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Breadcrumb::new(*t, i, i))
            .collect()
    }

    fn joined_len(crumbs: &[Breadcrumb], separator_len: usize) -> usize {
        let chars: usize = crumbs.iter().map(|c| c.char_len()).sum();
        chars + crumbs.len().saturating_sub(1) * separator_len
    }

    #[test]
    fn test_no_trim_when_within_budget() {
        let mut c = crumbs(&["alpha", "beta"]);
        fair_trim(&mut c, 3, 100);
        assert_eq!(c[0].text, "alpha");
        assert_eq!(c[1].text, "beta");
    }

    #[test]
    fn test_uneven_lengths() {
        // Budget 10 - 3 separators = 7; "g" fits and spends 1, "alpha"
        // triggers the cut with 6 left over two crumbs: 3 each.
        let mut c = crumbs(&["alpha", "beta_is_longer_name", "g"]);
        fair_trim(&mut c, 1, 10);

        assert_eq!(c[0].text, "alp");
        assert_eq!(c[1].text, "bet");
        assert_eq!(c[2].text, "g");
        assert!(joined_len(&c, 1) <= 10);
    }

    #[test]
    fn test_remainder_spread_one_extra_char() {
        // Budget 13 - 3 = 10 over three equal crumbs: two get 3, one gets 4.
        let mut c = crumbs(&["aaaaaa", "bbbbbb", "cccccc"]);
        fair_trim(&mut c, 1, 13);

        let mut lengths: Vec<usize> = c.iter().map(|b| b.char_len()).collect();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![3, 3, 4]);
        assert!(joined_len(&c, 1) <= 13);
    }

    #[test]
    fn test_short_crumbs_untouched() {
        let mut c = crumbs(&["aaaa", "bbbbbbbbbb"]);
        fair_trim(&mut c, 1, 10);

        // The short crumb keeps its text; only the long one is cut down
        // to what is left of the budget.
        assert_eq!(c[0].text, "aaaa");
        assert_eq!(c[1].text, "bbbb");
        assert!(joined_len(&c, 1) <= 10);
    }

    #[test]
    fn test_never_lengthens_and_keeps_count() {
        let original = crumbs(&["one", "three", "seventeen_chars__"]);
        let mut trimmed = original.clone();
        fair_trim(&mut trimmed, 2, 12);

        assert_eq!(trimmed.len(), original.len());
        for (t, o) in trimmed.iter().zip(&original) {
            assert!(t.char_len() <= o.char_len());
            assert!(o.text.starts_with(&t.text));
        }
    }

    #[test]
    fn test_zero_budget_empties_texts() {
        let mut c = crumbs(&["abc", "def"]);
        fair_trim(&mut c, 5, 4);

        assert_eq!(c.len(), 2);
        assert!(c.iter().all(|b| b.text.is_empty()));
    }

    #[test]
    fn test_truncate_chars_is_char_aware() {
        let mut s = String::from("héllo");
        truncate_chars(&mut s, 2);
        assert_eq!(s, "hé");

        let mut s = String::from("ab");
        truncate_chars(&mut s, 10);
        assert_eq!(s, "ab");
    }
}
