//! Repository layer for the hero resource.
//!
//! - `heroes`: [`HeroesClient`], one request per CRUD operation

pub mod heroes;

pub use heroes::{hero_path, HeroesClient, HEROES_PATH};
