//! Read-only hero detail view.
//!
//! [`HeroDetail::show`] follows the latest requested id. Every call cancels the
//! fetch still in flight for the previous id, so a slow response for an id the
//! user already navigated away from can never replace the hero being shown.
//!
//! ```text
//! show("1") ──fetch 1──────────────✗ (aborted)
//! show("2")        ──fetch 2──▶ publish Some(hero 2)
//! ```

use super::routes::{Navigator, Route};
use crate::domain::Hero;
use crate::repository::HeroesClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Detail view state for a single hero.
pub struct HeroDetail {
    client: HeroesClient,
    navigator: Arc<dyn Navigator>,

    /// Hero currently shown; `None` before the first load or for a missing hero.
    hero: Arc<watch::Sender<Option<Hero>>>,

    /// Generation of the latest `show` call.
    generation: Arc<AtomicU64>,

    inflight: Option<JoinHandle<()>>,
}

impl HeroDetail {
    #[must_use]
    pub fn new(client: HeroesClient, navigator: Arc<dyn Navigator>) -> Self {
        let (hero, _) = watch::channel(None);
        Self {
            client,
            navigator,
            hero: Arc::new(hero),
            generation: Arc::new(AtomicU64::new(0)),
            inflight: None,
        }
    }

    /// Starts loading the hero with `id`, superseding any earlier load.
    ///
    /// Blank ids are ignored. A failed fetch navigates to the technical error
    /// view and leaves the shown hero unchanged.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn show(&mut self, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            tracing::debug!("ignoring detail request without an id");
            return;
        }

        if let Some(previous) = self.inflight.take() {
            previous.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let client = self.client.clone();
        let navigator = Arc::clone(&self.navigator);
        let cell = Arc::clone(&self.hero);
        let latest = Arc::clone(&self.generation);
        let id = id.to_string();

        tracing::debug!(hero_id = %id, generation = generation, "loading hero detail");
        self.inflight = Some(tokio::spawn(async move {
            let outcome = client.get_by_id(&id).await;
            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(hero_id = %id, "detail superseded, dropping result");
                return;
            }
            match outcome {
                Ok(hero) => {
                    tracing::debug!(hero_id = %id, found = hero.is_some(), "hero detail loaded");
                    cell.send_replace(hero);
                }
                Err(e) => {
                    tracing::warn!(hero_id = %id, error = %e, "failed to load hero detail");
                    navigator.navigate(Route::TechnicalError);
                }
            }
        }));
    }

    /// Waits for the latest load to finish, if one is running.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.inflight.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "detail load task failed");
                }
            }
        }
    }

    /// Returns the hero currently shown.
    #[must_use]
    pub fn hero(&self) -> Option<Hero> {
        self.hero.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Hero>> {
        self.hero.subscribe()
    }

    /// Navigates back to the list.
    pub fn go_back(&self) {
        self.navigator.navigate(Route::List);
    }
}

impl std::fmt::Debug for HeroDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroDetail")
            .field("hero", &*self.hero.borrow())
            .field("loading", &self.inflight.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for HeroDetail {
    fn drop(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}
