//! Top-level rendering coordinator.
//!
//! Turns view models and view state into plain text screens. Nothing here
//! writes to the terminal; the caller decides where the text goes.
//!
//! # Example
//!
//! ```rust
//! use heroboard::ui::render_detail;
//!
//! assert_eq!(render_detail(None), "Hero not found\n");
//! ```

use crate::app::{Field, HeroForm};
use crate::domain::Hero;
use crate::ui::components;
use crate::ui::viewmodel::ListViewModel;
use std::fmt::Write;

/// Default screen width used by the terminal front end.
pub const DEFAULT_COLS: usize = 100;

/// Renders the list page.
#[must_use]
pub fn render(vm: &ListViewModel, cols: usize) -> String {
    components::render_list_page(vm, cols)
}

/// Renders the detail card of one hero.
#[must_use]
pub fn render_detail(hero: Option<&Hero>) -> String {
    let Some(hero) = hero else {
        return "Hero not found\n".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", hero.name, hero.id);
    let _ = writeln!(out, "  Secret identity:  {}", hero.secret_identity);
    let _ = writeln!(out, "  Publisher:        {}", hero.publisher);
    let _ = writeln!(out, "  First appearance: {}", hero.first_appearance);
    out
}

/// Renders the form with its current values and visible field errors.
#[must_use]
pub fn render_form(form: &HeroForm) -> String {
    let mut out = String::new();
    let title = match form.loaded() {
        Some(hero) => format!("Edit {}", hero.name),
        None => "New hero".to_string(),
    };
    let _ = writeln!(out, "{title}");
    for field in Field::ALL {
        let _ = write!(out, "  {:<18} {}", field.label(), form.record().get(field));
        if let Some(error) = form.field_error(field) {
            let _ = write!(out, "  ({field} {error})");
        }
        out.push('\n');
    }
    out
}
