//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`ListPage::compute_viewmodel`](crate::app::ListPage::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```rust
//! use heroboard::ui::viewmodel::{HeaderInfo, HeroRow, ListViewModel, SearchBarInfo};
//!
//! let vm = ListViewModel {
//!     header: HeaderInfo { title: "Heroes".to_string(), total: 1, shown: 1 },
//!     search_bar: SearchBarInfo { term: String::new(), pending: false },
//!     rows: vec![HeroRow {
//!         id: "1".to_string(),
//!         name: "Batman".to_string(),
//!         secret_identity: "Bruce Wayne".to_string(),
//!         publisher: "DC Comics".to_string(),
//!         first_appearance: "1939".to_string(),
//!         highlight_ranges: vec![],
//!     }],
//!     empty_state: None,
//!     confirm: None,
//! };
//! assert_eq!(vm.rows.len(), vm.header.shown);
//! ```

/// Complete view model of the hero list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub header: HeaderInfo,

    /// Committed search term and whether a newer input is still debouncing.
    pub search_bar: SearchBarInfo,

    /// Heroes matching the committed term, in list order.
    pub rows: Vec<HeroRow>,

    /// Shown instead of the table when no row matches.
    pub empty_state: Option<EmptyState>,

    /// Confirmation prompt while a deletion is pending.
    pub confirm: Option<ConfirmDialog>,
}

/// One hero in the list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRow {
    pub id: String,
    pub name: String,
    pub secret_identity: String,
    pub publisher: String,
    pub first_appearance: String,

    /// Character ranges of the name matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Heroes in the snapshot.
    pub total: usize,
    /// Heroes passing the current filter.
    pub shown: usize,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub term: String,
    pub pending: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No heroes found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub hero_id: String,
    pub message: String,
}
