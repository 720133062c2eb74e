//! Search input handling.
//!
//! - `filter`: pure hero filtering by a search term
//! - `debounce`: [`SearchDebouncer`], committing raw input after a quiet period

pub mod debounce;
pub mod filter;

pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE};
pub use filter::{filter_heroes, matches_term, normalize_term};
