//! Plain text rendering layer.
//!
//! ```text
//! ListPage → compute_viewmodel → ListViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Match highlighting and column fitting

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use components::render_toasts;
pub use renderer::{render, render_detail, render_form, DEFAULT_COLS};
pub use viewmodel::{
    ConfirmDialog, EmptyState, HeaderInfo, HeroRow, ListViewModel, SearchBarInfo,
};
