//! State machine types for the application.
//!
//! # Delete confirmation
//!
//! ```text
//!            request(hero)                 confirm / cancel
//!   Idle ─────────────────▶ Pending(hero) ──────────────────▶ Idle
//!                             │    ▲
//!                             └────┘ request(other): last request wins
//! ```
//!
//! # Form target
//!
//! A form either creates a new hero or edits an existing one. The route segment
//! `new` selects creation; any other segment is the id to edit.

use crate::domain::Hero;

/// Route segment that selects hero creation in the form route.
pub const NEW_HERO_SEGMENT: &str = "new";

/// Pending-deletion state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    /// No deletion awaiting confirmation.
    #[default]
    Idle,

    /// One hero awaiting explicit confirmation.
    PendingConfirmation(Hero),
}

impl DeleteState {
    /// Returns the hero awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&Hero> {
        match self {
            Self::Idle => None,
            Self::PendingConfirmation(hero) => Some(hero),
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What a hero form is editing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormTarget {
    /// Creating a hero that has no id yet.
    New,
    /// Editing the hero with this id.
    Edit(String),
}

impl FormTarget {
    /// Interprets a form route segment.
    ///
    /// ```
    /// use heroboard::app::FormTarget;
    ///
    /// assert_eq!(FormTarget::from_segment("new"), FormTarget::New);
    /// assert_eq!(FormTarget::from_segment("7"), FormTarget::Edit("7".into()));
    /// ```
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        if segment == NEW_HERO_SEGMENT {
            Self::New
        } else {
            Self::Edit(segment.to_string())
        }
    }

    /// Returns the route segment for this target.
    #[must_use]
    pub fn segment(&self) -> &str {
        match self {
            Self::New => NEW_HERO_SEGMENT,
            Self::Edit(id) => id,
        }
    }
}
