//! Header component renderer.

use crate::ui::viewmodel::HeaderInfo;
use std::fmt::Write;

/// Appends the title line, e.g. `Heroes (2 of 5)`.
pub fn render_header(out: &mut String, header: &HeaderInfo) {
    if header.shown == header.total {
        let _ = writeln!(out, "{} ({})", header.title, header.total);
    } else {
        let _ = writeln!(out, "{} ({} of {})", header.title, header.shown, header.total);
    }
}
