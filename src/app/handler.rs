//! Event handling for the hero list page.
//!
//! [`ListPage`] ties together the list state, the search debouncer and the
//! delete workflow, and turns user events into state changes and navigation.
//!
//! # Event Types
//!
//! - **Search**: `Search` feeds the debouncer; filtering follows the committed term
//! - **Delete**: `RequestDelete`, `ConfirmDelete`, `CancelDelete`
//! - **Data**: `Reload`
//! - **Navigation**: `Add`, `Edit`, `View`; leaving the list drops a pending deletion
//!
//! # Example
//!
//! ```rust,no_run
//! use heroboard::app::{Event, ListPage};
//! # async fn demo(mut page: ListPage) {
//! page.handle_event(Event::Reload).await;
//! page.handle_event(Event::Search("bat".into())).await;
//! let vm = page.compute_viewmodel();
//! println!("{} heroes shown", vm.header.shown);
//! # }
//! ```

use super::delete::DeleteWorkflow;
use super::modes::FormTarget;
use super::routes::{Navigator, Route};
use super::state::HeroList;
use crate::domain::Hero;
use crate::search::SearchDebouncer;
use crate::ui::helpers::match_ranges;
use crate::ui::viewmodel::{
    ConfirmDialog, EmptyState, HeaderInfo, HeroRow, ListViewModel, SearchBarInfo,
};
use std::sync::Arc;
use std::time::Duration;

/// User events on the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw search input; committed after the debounce window.
    Search(String),
    /// Asks to delete a hero; nothing is sent until confirmed.
    RequestDelete(Hero),
    /// Confirms the pending deletion.
    ConfirmDelete,
    /// Drops the pending deletion.
    CancelDelete,
    /// Fetches the list again.
    Reload,
    /// Opens the creation form.
    Add,
    /// Opens the edit form for the hero with this id.
    Edit(String),
    /// Opens the detail view for the hero with this id.
    View(String),
}

/// The hero list page.
pub struct ListPage {
    list: Arc<HeroList>,
    search: SearchDebouncer,
    delete: DeleteWorkflow,
    navigator: Arc<dyn Navigator>,
}

impl ListPage {
    /// Creates the page with the given search debounce delay.
    #[must_use]
    pub fn new(list: Arc<HeroList>, navigator: Arc<dyn Navigator>, debounce: Duration) -> Self {
        Self {
            delete: DeleteWorkflow::new(Arc::clone(&list)),
            search: SearchDebouncer::new(debounce),
            list,
            navigator,
        }
    }

    #[must_use]
    pub const fn list(&self) -> &Arc<HeroList> {
        &self.list
    }

    #[must_use]
    pub const fn search(&self) -> &SearchDebouncer {
        &self.search
    }

    #[must_use]
    pub const fn delete(&self) -> &DeleteWorkflow {
        &self.delete
    }

    /// Looks up a hero in the current snapshot.
    #[must_use]
    pub fn hero(&self, id: &str) -> Option<Hero> {
        self.list.snapshot().into_iter().find(|hero| hero.id == id)
    }

    /// Processes one event and returns whether the page needs re-rendering.
    ///
    /// `Search` returns `false`: the visible term only changes once the
    /// debouncer commits, which subscribers of [`SearchDebouncer::subscribe`]
    /// observe directly.
    pub async fn handle_event(&mut self, event: Event) -> bool {
        tracing::debug!(event_type = ?event, "handle_event");

        match event {
            Event::Search(raw) => {
                self.search.on_input(raw);
                false
            }
            Event::RequestDelete(hero) => {
                self.delete.request(hero);
                true
            }
            Event::ConfirmDelete => {
                let outcome = self.delete.confirm().await;
                tracing::debug!(outcome = ?outcome, "deletion finished");
                true
            }
            Event::CancelDelete => {
                self.delete.cancel();
                true
            }
            Event::Reload => {
                if let Err(e) = self.list.reload().await {
                    tracing::warn!(error = %e, "failed to load heroes");
                    self.navigator.navigate(Route::TechnicalError);
                }
                true
            }
            Event::Add => {
                self.delete.cancel();
                self.navigator.navigate(Route::Form(FormTarget::New));
                false
            }
            Event::Edit(id) => {
                self.delete.cancel();
                self.navigator.navigate(Route::Form(FormTarget::Edit(id)));
                false
            }
            Event::View(id) => {
                self.delete.cancel();
                self.navigator.navigate(Route::Detail { id });
                false
            }
        }
    }

    /// Builds the list view model from the snapshot and the committed term.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListViewModel {
        let term = self.search.term();
        let rows: Vec<HeroRow> = self
            .list
            .filtered(&term)
            .into_iter()
            .map(|hero| HeroRow {
                highlight_ranges: match_ranges(&hero.name, &term),
                id: hero.id,
                name: hero.name,
                secret_identity: hero.secret_identity,
                publisher: hero.publisher,
                first_appearance: hero.first_appearance,
            })
            .collect();

        let total = self.list.len();
        let empty_state = rows.is_empty().then(|| {
            if total == 0 {
                EmptyState {
                    message: "No heroes yet".to_string(),
                    subtitle: "Use 'add' to create the first one".to_string(),
                }
            } else {
                EmptyState {
                    message: "No heroes found".to_string(),
                    subtitle: format!("Nothing matches \"{}\"", term.trim()),
                }
            }
        });

        let confirm = self.delete.pending().map(|hero| ConfirmDialog {
            hero_id: hero.id.clone(),
            message: format!("Delete {}?", hero.name),
        });

        ListViewModel {
            header: HeaderInfo {
                title: "Heroes".to_string(),
                total,
                shown: rows.len(),
            },
            search_bar: SearchBarInfo {
                term,
                pending: self.search.is_pending(),
            },
            rows,
            empty_state,
            confirm,
        }
    }
}

impl std::fmt::Debug for ListPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPage")
            .field("list", &self.list)
            .field("search", &self.search)
            .field("delete", &self.delete)
            .finish_non_exhaustive()
    }
}
