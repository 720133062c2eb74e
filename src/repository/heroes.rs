//! Hero repository client.
//!
//! [`HeroesClient`] maps each CRUD operation onto exactly one request against the
//! `/heroes` collection. Responses are decoded into domain types and checked
//! for the persisted-id invariant.
//!
//! Deletion is the one operation that never fails: any failure collapses into
//! `false` so callers have no error branch to handle. Every other operation
//! propagates the transport error unchanged.

use crate::domain::error::{HeroboardError, Result};
use crate::domain::{Hero, HeroDraft};
use crate::transport::{Request, Transport};
use serde_json::Value;
use std::sync::Arc;

/// Collection path of the hero resource.
pub const HEROES_PATH: &str = "/heroes";

/// Returns the path addressing a single hero.
#[must_use]
pub fn hero_path(id: &str) -> String {
    format!("{HEROES_PATH}/{id}")
}

/// Request layer for the hero collection.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct HeroesClient {
    transport: Arc<dyn Transport>,
}

impl HeroesClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches every hero (`GET /heroes`).
    ///
    /// A `null` body is treated as an empty collection.
    ///
    /// # Errors
    ///
    /// Propagates transport errors, and returns [`HeroboardError::Decode`] if the
    /// body is not a hero array or any hero lacks an id.
    pub async fn list(&self) -> Result<Vec<Hero>> {
        let response = self.transport.send(Request::get(HEROES_PATH)).await?;

        let heroes: Vec<Hero> = if response.body.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(response.body)?
        };

        if let Some(position) = heroes.iter().position(|hero| !hero.has_id()) {
            return Err(HeroboardError::Decode(format!(
                "listed hero at position {position} has no id"
            )));
        }

        tracing::debug!(count = heroes.len(), "heroes listed");
        Ok(heroes)
    }

    /// Fetches one hero (`GET /heroes/{id}`).
    ///
    /// Returns `Ok(None)` when the backend answers with a `null` body.
    ///
    /// # Errors
    ///
    /// Propagates transport errors (a missing hero is usually a 404 status) and
    /// decode failures.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Hero>> {
        let response = self.transport.send(Request::get(hero_path(id))).await?;
        if response.body.is_null() {
            tracing::debug!(hero_id = %id, "hero not found");
            return Ok(None);
        }
        decode_persisted(response.body).map(Some)
    }

    /// Creates a hero (`POST /heroes`) and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Propagates transport errors and decode failures.
    pub async fn create(&self, draft: &HeroDraft) -> Result<Hero> {
        let body = serde_json::to_value(draft)?;
        let response = self.transport.send(Request::post(HEROES_PATH, body)).await?;
        let hero = decode_persisted(response.body)?;
        tracing::debug!(hero_id = %hero.id, "hero created");
        Ok(hero)
    }

    /// Replaces a hero (`PUT /heroes/{id}`).
    ///
    /// If the backend answers without a body the submitted hero is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HeroboardError::MissingId`] without sending anything when `hero`
    /// has no id; otherwise propagates transport errors and decode failures.
    pub async fn update(&self, hero: &Hero) -> Result<Hero> {
        if !hero.has_id() {
            return Err(HeroboardError::MissingId);
        }
        let body = serde_json::to_value(hero)?;
        let response = self.transport.send(Request::put(hero_path(&hero.id), body)).await?;
        if response.body.is_null() {
            return Ok(hero.clone());
        }
        let updated = decode_persisted(response.body)?;
        tracing::debug!(hero_id = %updated.id, "hero updated");
        Ok(updated)
    }

    /// Deletes a hero (`DELETE /heroes/{id}`).
    ///
    /// Resolves to `true` on success and `false` on any failure, network or
    /// status alike. The failure is logged here and not propagated.
    pub async fn delete_by_id(&self, id: &str) -> bool {
        match self.transport.send(Request::delete(hero_path(id))).await {
            Ok(_) => {
                tracing::debug!(hero_id = %id, "hero deleted");
                true
            }
            Err(e) => {
                tracing::warn!(hero_id = %id, status = e.status(), error = %e, "hero deletion failed");
                false
            }
        }
    }
}

impl std::fmt::Debug for HeroesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroesClient").finish_non_exhaustive()
    }
}

fn decode_persisted(body: Value) -> Result<Hero> {
    let hero: Hero = serde_json::from_value(body)?;
    if hero.has_id() {
        Ok(hero)
    } else {
        Err(HeroboardError::Decode("hero returned without an id".to_string()))
    }
}
