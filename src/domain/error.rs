//! Error types for heroboard.
//!
//! This module defines the centralized error type [`HeroboardError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// Status reported for failures that never produced an HTTP response.
///
/// Mirrors the browser convention where an unreachable server yields status `0`.
pub const NO_STATUS: u16 = 0;

/// The main error type for heroboard operations.
///
/// Transport and application failures are kept as separate variants so callers
/// can log them precisely, but both expose a numeric [`status`](Self::status)
/// and are treated identically by the response notifier.
///
/// # Examples
///
/// ```
/// use heroboard::HeroboardError;
///
/// let err = HeroboardError::Status { status: 404, message: "Not found".into() };
/// assert_eq!(err.status(), 404);
///
/// let err = HeroboardError::Network("connection refused".into());
/// assert_eq!(err.status(), 0);
/// ```
#[derive(Debug, Error)]
pub enum HeroboardError {
    /// The request never reached the backend (DNS, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` holds the response body as text, which is usually a short
    /// description from the server.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// An operation that addresses a stored hero was given one without an id.
    #[error("Hero has no identifier")]
    MissingId,

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeroboardError {
    /// Returns the HTTP status code carried by this error.
    ///
    /// Failures without an HTTP response report [`NO_STATUS`].
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            _ => NO_STATUS,
        }
    }

    /// Returns `true` for failures raised at the transport boundary.
    ///
    /// These are the failures the response notifier reports; local decode or
    /// configuration problems are not request failures.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }
}

impl From<serde_json::Error> for HeroboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for heroboard operations.
pub type Result<T> = std::result::Result<T, HeroboardError>;
