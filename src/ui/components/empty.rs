//! Empty state component renderer.

use crate::ui::viewmodel::EmptyState;
use std::fmt::Write;

/// Appends the centered two-line empty state message.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, cols: usize) {
    for line in [&empty.message, &empty.subtitle] {
        let padding = cols.saturating_sub(line.chars().count()) / 2;
        let _ = writeln!(out, "{}{line}", " ".repeat(padding));
    }
}
