//! Request outcome notifications.
//!
//! # Modules
//!
//! - `notification`: [`Notification`] model, [`NotificationSink`] trait and the
//!   [`NotificationCenter`] toast queue
//! - `interceptor`: [`NotifyingTransport`], the transport wrapper that emits them

pub mod interceptor;
pub mod notification;

pub use interceptor::NotifyingTransport;
pub use notification::{
    Notification, NotificationCenter, NotificationSink, Severity, DEFAULT_LIFE_MS,
};
