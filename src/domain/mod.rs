//! Domain layer for heroboard.
//!
//! Core types independent of the transport and of any rendering concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`hero`]: Hero model and creation draft

pub mod error;
pub mod hero;

pub use error::{HeroboardError, Result, NO_STATUS};
pub use hero::{Hero, HeroDraft};
