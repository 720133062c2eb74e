//! reqwest-backed transport.
//!
//! Sends JSON requests to `<base_url><path>` and maps the outcome onto the
//! [`Transport`] contract: 2xx bodies are parsed as JSON (empty bodies become
//! `null`), non-2xx statuses become [`HeroboardError::Status`] and connection
//! problems become [`HeroboardError::Network`].

use super::backend::{Method, Request, Response, Transport};
use crate::domain::error::{HeroboardError, Result};
use futures_util::future::BoxFuture;
use serde_json::Value;
use std::time::Duration;
use tracing::Instrument;

/// HTTP transport talking to the hero backend.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url` with a per-request timeout.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HeroboardError::Config`] if the underlying client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HeroboardError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HeroboardError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HeroboardError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&bytes).into_owned();
            tracing::debug!(status = status.as_u16(), "request rejected by backend");
            return Err(HeroboardError::Status {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status.canonical_reason().unwrap_or_default().to_string()
                } else {
                    message
                },
            });
        }

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        tracing::debug!(status = status.as_u16(), "request completed");
        Ok(Response { status: status.as_u16(), body })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        let span = tracing::debug_span!("http_request",
            method = %request.method,
            path = %request.path
        );
        Box::pin(self.execute(request).instrument(span))
    }
}
