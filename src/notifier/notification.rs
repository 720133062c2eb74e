//! Notification model and sinks.
//!
//! A [`Notification`] is an ephemeral toast describing the outcome of one request.
//! Producers hand notifications to a [`NotificationSink`]; the renderer side
//! decides how long to show them using [`Notification::is_expired`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// Default display duration for notifications in milliseconds.
pub const DEFAULT_LIFE_MS: u64 = 3000;

const SUCCESS_SUMMARY: &str = "Operation completed";
const SUCCESS_DETAIL: &str = "The operation completed successfully";
const ERROR_SUMMARY: &str = "An error occurred";
const ERROR_DETAIL: &str = "The operation could not be completed";

/// Outcome class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A single toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Display duration in milliseconds.
    pub life: u64,
    /// When the notification was raised.
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    /// The generic success notification for a completed write.
    #[must_use]
    pub fn success(life: u64) -> Self {
        Self::new(Severity::Success, SUCCESS_SUMMARY, SUCCESS_DETAIL, life)
    }

    /// The generic failure notification.
    ///
    /// The same text is used for every failure; status codes are not surfaced.
    #[must_use]
    pub fn error(life: u64) -> Self {
        Self::new(Severity::Error, ERROR_SUMMARY, ERROR_DETAIL, life)
    }

    fn new(severity: Severity, summary: &str, detail: &str, life: u64) -> Self {
        Self {
            severity,
            summary: summary.to_string(),
            detail: detail.to_string(),
            life,
            issued_at: Utc::now(),
        }
    }

    /// Returns the instant after which the notification should no longer be shown.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let life = chrono::Duration::milliseconds(i64::try_from(self.life).unwrap_or(i64::MAX));
        self.issued_at
            .checked_add_signed(life)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns `true` once `now` is past the display duration.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Receiver of notifications.
///
/// Implementations must not block; the notifier calls `notify` inline while a
/// request completes.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl NotificationSink for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::debug!("notification receiver dropped, discarding notification");
        }
    }
}

/// In-memory queue of visible notifications.
///
/// Acts as the toast area: notifications are appended as they arrive and
/// pruned lazily once their life has elapsed.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: Mutex<VecDeque<Notification>>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops expired notifications and returns the ones still visible at `now`.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.retain(|n| !n.is_expired(now));
        queue.iter().cloned().collect()
    }

    /// Number of queued notifications, expired or not.
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&self, notification: Notification) {
        tracing::trace!(severity = ?notification.severity, "notification queued");
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notification);
    }
}
