//! Navigation targets and the navigation sink.
//!
//! Components never switch views themselves; they emit a [`Route`] through an
//! injected [`Navigator`]. The front end owns the actual view switching.

use super::modes::FormTarget;
use std::fmt;
use tokio::sync::mpsc::UnboundedSender;

/// Views the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The hero list (also the landing view).
    List,
    /// Read-only detail of one hero.
    Detail { id: String },
    /// Create or edit form.
    Form(FormTarget),
    /// Generic "something went wrong" view.
    TechnicalError,
}

impl Route {
    /// Returns the canonical path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/heroes/list".to_string(),
            Self::Detail { id } => format!("/heroes/detail/{id}"),
            Self::Form(target) => format!("/heroes/form/{}", target.segment()),
            Self::TechnicalError => "/technical-error".to_string(),
        }
    }

    /// Resolves a path to a route.
    ///
    /// The empty path and every unknown path redirect to [`Route::List`].
    ///
    /// ```
    /// use heroboard::app::{FormTarget, Route};
    ///
    /// assert_eq!(Route::parse("/heroes/form/new"), Route::Form(FormTarget::New));
    /// assert_eq!(Route::parse("/heroes/detail/3"), Route::Detail { id: "3".into() });
    /// assert_eq!(Route::parse("/nowhere"), Route::List);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["heroes", "detail", id] => Self::Detail { id: (*id).to_string() },
            ["heroes", "form", segment] => Self::Form(FormTarget::from_segment(segment)),
            ["technical-error"] => Self::TechnicalError,
            _ => Self::List,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Receiver of navigation intents.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

impl Navigator for UnboundedSender<Route> {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigating");
        if self.send(route).is_err() {
            tracing::debug!("navigation receiver dropped, ignoring route");
        }
    }
}
