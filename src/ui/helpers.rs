//! Shared rendering utilities.
//!
//! Operates on character indices, not byte indices, so multi-byte names
//! highlight and pad correctly.

/// Finds every case-insensitive occurrence of `needle` in `text`.
///
/// Returns `(start, end)` character ranges, non-overlapping, left to right.
/// A blank needle matches nothing.
///
/// ```
/// use heroboard::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Batman", "BAT"), vec![(0, 3)]);
/// assert!(match_ranges("Batman", " ").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let hay: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.trim().chars().map(fold).collect();
    if needle.is_empty() || needle.len() > hay.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Wraps each highlighted range of `text` in square brackets.
///
/// ```
/// use heroboard::ui::helpers::render_highlighted_text;
///
/// assert_eq!(render_highlighted_text("Batman", &[(0, 3)]), "[Bat]man");
/// ```
#[must_use]
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        out.extend(&chars[current_pos..start]);
        out.push('[');
        out.extend(&chars[start..end]);
        out.push(']');
        current_pos = end;
    }
    out.extend(&chars[current_pos..]);
    out
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Truncated text ends with `…`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
