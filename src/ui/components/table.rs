//! Table component renderer.
//!
//! Renders the hero list with fixed-width columns. The NAME column carries
//! search highlighting.

use crate::ui::helpers::{fit, render_highlighted_text};
use crate::ui::viewmodel::HeroRow;
use std::fmt::Write;

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const IDENTITY_WIDTH: usize = 24;
const PUBLISHER_WIDTH: usize = 18;

/// Appends the column headers.
pub fn render_table_headers(out: &mut String) {
    let _ = writeln!(
        out,
        "{:<ID_WIDTH$} {:<NAME_WIDTH$} {:<IDENTITY_WIDTH$} {:<PUBLISHER_WIDTH$} FIRST",
        "ID", "NAME", "IDENTITY", "PUBLISHER"
    );
}

/// Appends one line per row.
pub fn render_table_rows(out: &mut String, rows: &[HeroRow]) {
    for row in rows {
        render_table_row(out, row);
    }
}

fn render_table_row(out: &mut String, row: &HeroRow) {
    let name = fit(&row.name, NAME_WIDTH);
    // Highlight after fitting so padding stays aligned; brackets widen the cell.
    let ranges: Vec<(usize, usize)> = row
        .highlight_ranges
        .iter()
        .copied()
        .filter(|&(_, end)| end <= NAME_WIDTH.saturating_sub(1))
        .collect();
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        fit(&row.id, ID_WIDTH),
        render_highlighted_text(&name, &ranges),
        fit(&row.secret_identity, IDENTITY_WIDTH),
        fit(&row.publisher, PUBLISHER_WIDTH),
        row.first_appearance,
    );
}
