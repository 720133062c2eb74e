//! List synchronization state.
//!
//! [`HeroList`] owns the authoritative in-memory hero collection. The collection
//! is only ever replaced wholesale by [`HeroList::reload`]; there is no
//! incremental patching and no optimistic update. Readers take snapshots or
//! subscribe to replacements through a `tokio::sync::watch` cell.
//!
//! # Ordering
//!
//! Reloads may overlap. Each reload takes a ticket when it starts, and only the
//! most recently started reload is allowed to publish its result. A slower,
//! older reload finishing last is discarded instead of overwriting fresher data.
//!
//! # Example
//!
//! ```no_run
//! use heroboard::app::HeroList;
//! # async fn demo(client: heroboard::repository::HeroesClient) -> heroboard::Result<()> {
//! let list = HeroList::new(client);
//! assert!(list.snapshot().is_empty());
//! list.reload().await?;
//! println!("{} heroes", list.snapshot().len());
//! # Ok(())
//! # }
//! ```

use crate::domain::error::Result;
use crate::domain::Hero;
use crate::repository::HeroesClient;
use crate::search::filter_heroes;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Owner of the hero collection snapshot.
#[derive(Debug)]
pub struct HeroList {
    /// Repository used for every fetch and mutation.
    client: HeroesClient,

    /// Current snapshot; empty until the first successful reload.
    snapshot: watch::Sender<Vec<Hero>>,

    /// Ticket of the most recently started reload.
    issued: AtomicU64,
}

impl HeroList {
    /// Creates an empty list backed by `client`.
    #[must_use]
    pub fn new(client: HeroesClient) -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self {
            client,
            snapshot,
            issued: AtomicU64::new(0),
        }
    }

    /// Returns the repository client shared with mutating components.
    #[must_use]
    pub const fn client(&self) -> &HeroesClient {
        &self.client
    }

    /// Fetches the full collection and replaces the snapshot with it.
    ///
    /// On failure the previous snapshot is kept untouched.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`HeroesClient::list`].
    pub async fn reload(&self) -> Result<()> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(ticket = ticket, "reloading hero list");

        let heroes = self.client.list().await?;

        if self.issued.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket = ticket, "newer reload in flight, discarding stale result");
            return Ok(());
        }

        tracing::debug!(ticket = ticket, count = heroes.len(), "hero list replaced");
        self.snapshot.send_replace(heroes);
        Ok(())
    }

    /// Returns a copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Hero> {
        self.snapshot.borrow().clone()
    }

    /// Returns the heroes matching `term`, in snapshot order.
    #[must_use]
    pub fn filtered(&self, term: &str) -> Vec<Hero> {
        let snapshot = self.snapshot.borrow();
        filter_heroes(&snapshot, term).into_iter().cloned().collect()
    }

    /// Number of heroes in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes to snapshot replacements.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Hero>> {
        self.snapshot.subscribe()
    }
}
