//! Application layer coordinating state, events, and navigation.
//!
//! This layer sits between the front end (main.rs) and the repository client.
//! Components receive their collaborators through constructors: the shared
//! [`HeroList`], a [`Navigator`] for view changes, and through the transport
//! stack, the notification sink.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → ListPage / HeroDetail / HeroForm → HeroesClient
//!                          │                                   │
//!                          └── Route ──▶ Navigator      reload ▼
//!                                                         HeroList ──▶ subscribers
//! ```
//!
//! # Modules
//!
//! - [`state`]: List synchronization state with ordered reloads
//! - [`delete`]: Delete confirmation workflow
//! - [`detail`]: Hero detail view with switch-latest loading
//! - [`form`]: Create and edit form with validation
//! - [`handler`]: List page event processing and view model computation
//! - [`modes`]: State machine types
//! - [`routes`]: Navigation targets and the navigation sink

pub mod delete;
pub mod detail;
pub mod form;
pub mod handler;
pub mod modes;
pub mod routes;
pub mod state;

pub use delete::{DeleteOutcome, DeleteWorkflow, INVALID_DELETE_TARGET};
pub use detail::HeroDetail;
pub use form::{Field, FieldError, HeroForm, HeroRecord, SubmitOutcome};
pub use handler::{Event, ListPage};
pub use modes::{DeleteState, FormTarget, NEW_HERO_SEGMENT};
pub use routes::{Navigator, Route};
pub use state::HeroList;
