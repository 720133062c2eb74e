//! Search bar component renderer.

use crate::ui::viewmodel::SearchBarInfo;
use std::fmt::Write;

/// Appends the committed search term.
///
/// A trailing `…` marks input that has not been committed yet.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo) {
    let marker = if search.pending { " …" } else { "" };
    let _ = writeln!(out, "Search: {}{marker}", search.term);
}
