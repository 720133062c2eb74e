//! Transport abstraction.
//!
//! This module defines the [`Transport`] trait that every outbound request goes
//! through. The repository client only speaks to this trait, so the reqwest
//! backend, the notifying interceptor and test doubles are interchangeable.
//!
//! # Design
//!
//! The trait is intentionally minimal: one method sending one [`Request`] and
//! resolving to one [`Response`] or one error. It returns a boxed future so that
//! transports can be stacked behind `Arc<dyn Transport>`.

use crate::domain::Result;
use futures_util::future::BoxFuture;
use serde_json::Value;
use std::fmt;

/// HTTP methods used by the repository client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that change backend state.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outbound request.
///
/// `path` is relative to the transport's base URL and always starts with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// A successful (2xx) response.
///
/// An empty body is represented as [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

/// Abstraction over the request/response boundary.
///
/// Implementations resolve to `Ok` only for 2xx responses. Anything else is an
/// error: [`HeroboardError::Network`](crate::HeroboardError::Network) when no
/// response was received and
/// [`HeroboardError::Status`](crate::HeroboardError::Status) for non-2xx answers.
///
/// # Implementations
///
/// - [`HttpTransport`](super::HttpTransport): reqwest against a base URL
/// - [`NotifyingTransport`](crate::notifier::NotifyingTransport): wraps another
///   transport and reports outcomes to a notification sink
pub trait Transport: Send + Sync {
    /// Sends one request and resolves once its outcome is known.
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_writes_are_mutations() {
        assert!(!Method::Get.is_mutation());
        assert!(Method::Post.is_mutation());
        assert!(Method::Put.is_mutation());
        assert!(Method::Delete.is_mutation());
    }

    #[test]
    fn constructors_attach_bodies_only_to_writes() {
        assert_eq!(Request::get("/heroes").body, None);
        assert_eq!(Request::delete("/heroes/1").method, Method::Delete);
        assert_eq!(Request::post("/heroes", json!({})).body, Some(json!({})));
        assert_eq!(Request::put("/heroes/1", json!({"a": 1})).method.to_string(), "PUT");
    }
}
