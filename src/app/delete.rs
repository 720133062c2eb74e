//! Delete confirmation workflow.
//!
//! Deletion is a two-step interaction: the user first asks to delete a hero,
//! which only records it as pending, and then confirms or cancels. Nothing is
//! sent to the backend before confirmation.
//!
//! Confirmation always ends in [`DeleteState::Idle`], whatever happens:
//! a missing id aborts with a logged diagnostic, a failed delete is absorbed by
//! the repository client, and both successful and failed deletes are followed
//! by one list reload.

use super::modes::DeleteState;
use super::state::HeroList;
use crate::domain::Hero;
use std::sync::Arc;

/// Diagnostic logged when confirmation has nothing valid to delete.
pub const INVALID_DELETE_TARGET: &str = "no valid hero id was provided for deletion";

/// Result of a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend deleted the hero.
    Deleted,
    /// The delete request failed; the list was reloaded anyway.
    Failed,
    /// Nothing was pending, or the pending hero had no id. No request was sent.
    Aborted,
}

/// State machine gating deletes behind explicit confirmation.
#[derive(Debug)]
pub struct DeleteWorkflow {
    state: DeleteState,
    list: Arc<HeroList>,
}

impl DeleteWorkflow {
    /// Creates an idle workflow deleting through `list`'s client.
    #[must_use]
    pub fn new(list: Arc<HeroList>) -> Self {
        Self {
            state: DeleteState::Idle,
            list,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Returns the hero awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&Hero> {
        self.state.pending()
    }

    /// Marks `hero` for deletion, replacing any hero already pending.
    pub fn request(&mut self, hero: Hero) {
        if let Some(previous) = self.state.pending() {
            tracing::debug!(previous_id = %previous.id, hero_id = %hero.id, "replacing pending deletion");
        } else {
            tracing::debug!(hero_id = %hero.id, "deletion requested");
        }
        self.state = DeleteState::PendingConfirmation(hero);
    }

    /// Drops the pending deletion without contacting the backend.
    pub fn cancel(&mut self) {
        if let DeleteState::PendingConfirmation(hero) = std::mem::take(&mut self.state) {
            tracing::debug!(hero_id = %hero.id, "deletion cancelled");
        }
    }

    /// Deletes the pending hero and reloads the list.
    ///
    /// The workflow is back in [`DeleteState::Idle`] as soon as this is called,
    /// so a dropped future cannot leave a deletion dangling.
    pub async fn confirm(&mut self) -> DeleteOutcome {
        let hero = match std::mem::take(&mut self.state) {
            DeleteState::PendingConfirmation(hero) if hero.has_id() => hero,
            _ => {
                tracing::error!("{INVALID_DELETE_TARGET}");
                return DeleteOutcome::Aborted;
            }
        };

        tracing::debug!(hero_id = %hero.id, "deletion confirmed");
        let deleted = self.list.client().delete_by_id(&hero.id).await;

        if let Err(e) = self.list.reload().await {
            tracing::warn!(hero_id = %hero.id, error = %e, "reload after deletion failed");
        }

        if deleted {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Failed
        }
    }
}
