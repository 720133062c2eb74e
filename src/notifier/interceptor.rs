//! Response-notifying transport wrapper.
//!
//! [`NotifyingTransport`] sits in front of any other [`Transport`] and reports the
//! outcome of every request to a [`NotificationSink`]:
//!
//! | Outcome                         | Notification |
//! |---------------------------------|--------------|
//! | 2xx for `GET`                   | none         |
//! | 2xx for `POST`, `PUT`, `DELETE` | one success  |
//! | any failure, any method         | one error    |
//!
//! The wrapper is observational: successful responses are forwarded untouched
//! and failures are returned to the caller as the very same error value.

use super::notification::{Notification, NotificationSink};
use crate::domain::Result;
use crate::transport::{Request, Response, Transport};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Transport decorator emitting one notification per request outcome.
pub struct NotifyingTransport<T> {
    inner: T,
    sink: Arc<dyn NotificationSink>,
    life: u64,
}

impl<T: Transport> NotifyingTransport<T> {
    /// Wraps `inner`, reporting to `sink` with notifications shown for `life` ms.
    pub fn new(inner: T, sink: Arc<dyn NotificationSink>, life: u64) -> Self {
        Self { inner, sink, life }
    }

    /// Returns the wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transport> Transport for NotifyingTransport<T> {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        Box::pin(async move {
            let method = request.method;
            let path = request.path.clone();

            match self.inner.send(request).await {
                Ok(response) => {
                    if method.is_mutation() {
                        tracing::debug!(method = %method, path = %path, "mutation succeeded");
                        self.sink.notify(Notification::success(self.life));
                    }
                    Ok(response)
                }
                Err(err) => {
                    tracing::warn!(
                        method = %method,
                        path = %path,
                        status = err.status(),
                        error = %err,
                        "request failed"
                    );
                    self.sink.notify(Notification::error(self.life));
                    Err(err)
                }
            }
        })
    }
}

impl<T> std::fmt::Debug for NotifyingTransport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyingTransport")
            .field("life", &self.life)
            .finish_non_exhaustive()
    }
}
