//! Confirmation prompt and notification toasts.

use crate::notifier::{Notification, Severity};
use crate::ui::viewmodel::ConfirmDialog;
use std::fmt::Write;

/// Appends the delete confirmation prompt.
pub fn render_confirm_dialog(out: &mut String, confirm: &ConfirmDialog) {
    let _ = writeln!(out, "{} [yes/no]", confirm.message);
}

/// Renders active notifications, one per line, oldest first.
#[must_use]
pub fn render_toasts(notifications: &[Notification]) -> String {
    let mut out = String::new();
    for notification in notifications {
        let icon = match notification.severity {
            Severity::Success => '✔',
            Severity::Error => '✖',
        };
        let _ = writeln!(out, "{icon} {}: {}", notification.summary, notification.detail);
    }
    out
}
