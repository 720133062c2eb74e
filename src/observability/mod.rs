//! Structured logging to a rotating file.
//!
//! # Features
//!
//! - **File Output**: Events written to `<data dir>/heroboard.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Filtering**: `trace_level` from [`Config`](crate::Config), default `"info"`
//!
//! # Usage
//!
//! Initialize tracing early, before building the client:
//!
//! ```rust,no_run
//! use heroboard::observability::init_tracing;
//! use heroboard::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("heroboard started");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
