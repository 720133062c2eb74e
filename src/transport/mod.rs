//! Transport layer for backend requests.
//!
//! # Modules
//!
//! - `backend`: [`Transport`] trait and request/response types
//! - `http`: reqwest implementation against a base URL

pub mod backend;
pub mod http;

pub use backend::{Method, Request, Response, Transport};
pub use http::HttpTransport;
