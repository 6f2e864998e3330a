//! Shared view helpers.
//!
//! Highlight ranges are expressed in character indices (not byte indices) so
//! renderers can slice `text.chars()` directly.

/// Finds every non-overlapping, case-insensitive occurrence of `query` in `text`.
///
/// Returns `(start, end)` character ranges, end exclusive, left to right.
/// Returns no ranges for an empty query, or when lowercasing would change the
/// character count of `text` or `query` (indices would no longer line up).
///
/// # Example
///
/// ```rust
/// use resource_hub::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Guide to guides", "GUIDE"), vec![(0, 5), (9, 14)]);
/// assert!(match_ranges("Guide", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let (Some(haystack), Some(needle)) = (lower_chars(text), lower_chars(query)) else {
        return vec![];
    };

    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Lowercases char by char, bailing out on characters that expand.
fn lower_chars(s: &str) -> Option<Vec<char>> {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => Some(single),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn indices_are_character_based() {
        assert_eq!(match_ranges("Über guide", "guide"), vec![(5, 10)]);
    }

    #[test]
    fn no_match_no_ranges() {
        assert!(match_ranges("Workplace Chat", "mental").is_empty());
        assert!(match_ranges("ab", "abc").is_empty());
    }

    #[test]
    fn expanding_lowercase_disables_highlighting() {
        assert!(match_ranges("\u{130}stanbul", "stan").is_empty());
    }
}
