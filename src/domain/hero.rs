//! Hero domain model.
//!
//! This module defines [`Hero`], the entity managed by the registry, and
//! [`HeroDraft`], the shape sent to the backend when a hero is created. The wire
//! names (`superhero`, `alter_ego`, `img`, `alt_img`) are fixed by the backend and
//! mapped onto descriptive field names with serde renames.

use serde::{Deserialize, Serialize};

/// A hero as stored by the backend.
///
/// A hero returned by the backend always carries a non-empty `id`; the
/// repository client rejects responses that break this. Locally built heroes
/// (for example a pending deletion) may still hold an empty id, which is why the
/// field is a plain `String` checked with [`Hero::has_id`].
///
/// # Examples
///
/// ```
/// use heroboard::Hero;
///
/// let hero: Hero = serde_json::from_str(
///     r#"{"id":"1","superhero":"Batman","alter_ego":"Bruce Wayne","publisher":"DC Comics","first_appearance":"1939"}"#,
/// )?;
/// assert_eq!(hero.name, "Batman");
/// assert!(hero.has_id());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Opaque backend identifier.
    #[serde(default)]
    pub id: String,

    /// Hero name.
    #[serde(rename = "superhero")]
    pub name: String,

    /// Civilian identity.
    #[serde(rename = "alter_ego", default)]
    pub secret_identity: String,

    /// Comic publisher.
    #[serde(default)]
    pub publisher: String,

    /// Year or issue of the first appearance.
    #[serde(default)]
    pub first_appearance: String,

    /// Primary image reference.
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Alternate image reference.
    #[serde(rename = "alt_img", default, skip_serializing_if = "Option::is_none")]
    pub alt_image: Option<String>,
}

impl Hero {
    /// Builds a persisted hero from its id and field values.
    #[must_use]
    pub fn from_draft(id: impl Into<String>, draft: HeroDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            secret_identity: draft.secret_identity,
            publisher: draft.publisher,
            first_appearance: draft.first_appearance,
            image: draft.image,
            alt_image: draft.alt_image,
        }
    }

    /// Returns `true` when the hero carries a usable identifier.
    ///
    /// Whitespace-only ids are treated as missing.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Returns the field values without the identifier.
    #[must_use]
    pub fn to_draft(&self) -> HeroDraft {
        HeroDraft {
            name: self.name.clone(),
            secret_identity: self.secret_identity.clone(),
            publisher: self.publisher.clone(),
            first_appearance: self.first_appearance.clone(),
            image: self.image.clone(),
            alt_image: self.alt_image.clone(),
        }
    }
}

/// A hero that has not been persisted yet.
///
/// Serializes without an `id` field so the backend assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroDraft {
    /// Hero name.
    #[serde(rename = "superhero")]
    pub name: String,

    /// Civilian identity.
    #[serde(rename = "alter_ego")]
    pub secret_identity: String,

    /// Comic publisher.
    pub publisher: String,

    /// Year or issue of the first appearance.
    pub first_appearance: String,

    /// Primary image reference.
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Alternate image reference.
    #[serde(rename = "alt_img", default, skip_serializing_if = "Option::is_none")]
    pub alt_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batman() -> Hero {
        Hero {
            id: "1".into(),
            name: "Batman".into(),
            secret_identity: "Bruce Wayne".into(),
            publisher: "DC Comics".into(),
            first_appearance: "1939".into(),
            image: None,
            alt_image: None,
        }
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let value = serde_json::to_value(batman()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "superhero": "Batman",
                "alter_ego": "Bruce Wayne",
                "publisher": "DC Comics",
                "first_appearance": "1939"
            })
        );
    }

    #[test]
    fn draft_never_carries_an_id() {
        let value = serde_json::to_value(batman().to_draft()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["superhero"], "Batman");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let hero: Hero = serde_json::from_value(json!({
            "id": "2",
            "superhero": "Superman",
            "alter_ego": "Clark Kent",
            "publisher": "DC Comics"
        }))
        .unwrap();
        assert_eq!(hero.first_appearance, "");
        assert_eq!(hero.image, None);
    }

    #[test]
    fn blank_ids_are_not_usable() {
        let mut hero = batman();
        assert!(hero.has_id());
        hero.id = "  ".into();
        assert!(!hero.has_id());
    }
}
