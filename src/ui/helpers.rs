//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components, plus the substring scanner that feeds search match
//! highlighting. All text operations use character indices, not byte indices,
//! so multi-byte input cannot split a code point.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds every case-insensitive occurrence of `query` within `text`.
///
/// Returns `(start, end)` character index ranges into `text` itself
/// (inclusive start, exclusive end), non-overlapping and in left-to-right
/// order. An empty query yields no ranges.
///
/// Lowercasing can expand a character into several ('İ' becomes "i" plus a
/// combining dot), so the needle is compared against each character's
/// lowercase expansion in place rather than against a lowercased copy whose
/// positions no longer line up with the original.
///
/// # Parameters
///
/// * `text` - Text to scan
/// * `query` - Search query (matched as a plain substring)
#[must_use]
pub fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if let Some(end) = match_at(&chars, pos, &needle) {
            ranges.push((pos, end));
            pos = end;
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Matches `needle` against the lowercase expansion of `chars` starting at
/// `pos`.
///
/// Returns the exclusive end position in `chars` on success. A match that
/// ends partway through one character's expansion claims that whole
/// character.
fn match_at(chars: &[char], pos: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in chars[pos..].iter().enumerate() {
        for lower in ch.to_lowercase() {
            if matched == needle.len() {
                break;
            }
            if lower != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(pos + offset + 1);
        }
    }
    None
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors unless
/// the row is selected, in which case selection colors take precedence and
/// highlighting is suppressed.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is currently selected (disables match highlighting)
///
/// # Output
///
/// Prints to stdout using ANSI escape sequences:
/// - Normal sections: whatever styling is already active
/// - Highlighted sections: `match_highlight_fg` + `match_highlight_bg`
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len()).max(start);
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_case_insensitive() {
        assert_eq!(substring_ranges("Janet Weaver", "wea"), vec![(6, 9)]);
        assert_eq!(substring_ranges("Janet Weaver", "WEA"), vec![(6, 9)]);
    }

    #[test]
    fn empty_query_yields_no_ranges() {
        assert!(substring_ranges("Janet Weaver", "").is_empty());
    }

    #[test]
    fn repeated_matches_do_not_overlap() {
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn no_match_yields_no_ranges() {
        assert!(substring_ranges("Janet", "xyz").is_empty());
        assert!(substring_ranges("a", "longer than text").is_empty());
    }

    #[test]
    fn ranges_index_the_original_text_when_lowercase_expands() {
        // 'İ' lowercases to two characters, so positions computed over a
        // lowercased copy would run past the original's length.
        let ranges = substring_ranges("İİx", "x");
        assert_eq!(ranges, vec![(2, 3)]);
        render_highlighted_text("İİx", &ranges, &Theme::default(), false);

        assert_eq!(substring_ranges("İstanbul", "i"), vec![(0, 1)]);
        assert_eq!(substring_ranges("İstanbul", "stan"), vec![(1, 5)]);
    }
}
