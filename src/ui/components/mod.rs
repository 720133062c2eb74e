//! Composable UI component renderers.
//!
//! Each component appends its part of the page to a `String` buffer, so the
//! whole screen can be printed at once or inspected in tests.
//!
//! # Components
//!
//! - [`header`]: Title bar with hero counts
//! - [`search`]: Committed search term
//! - [`table`]: Hero list with columns (ID, NAME, IDENTITY, PUBLISHER, FIRST)
//! - [`empty`]: Empty state message when no hero matches
//! - [`dialog`]: Delete confirmation prompt and notification toasts

mod dialog;
mod empty;
mod header;
mod search;
mod table;

pub use dialog::{render_confirm_dialog, render_toasts};

use crate::ui::viewmodel::ListViewModel;

use empty::render_empty_state;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Appends a horizontal border line.
fn render_border(out: &mut String, cols: usize) {
    out.push_str(&"─".repeat(cols));
    out.push('\n');
}

/// Renders the list page: header, search bar, table or empty state, prompt.
#[must_use]
pub fn render_list_page(vm: &ListViewModel, cols: usize) -> String {
    let mut out = String::new();
    render_header(&mut out, &vm.header);
    render_search_bar(&mut out, &vm.search_bar);
    render_border(&mut out, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(&mut out, empty, cols);
    } else {
        render_table_headers(&mut out);
        render_table_rows(&mut out, &vm.rows);
    }

    if let Some(confirm) = &vm.confirm {
        render_border(&mut out, cols);
        render_confirm_dialog(&mut out, confirm);
    }
    out
}
