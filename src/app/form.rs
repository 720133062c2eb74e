//! Create and edit form.
//!
//! The form edits a [`HeroRecord`], a plain set of strings, and validates it
//! against a fixed rule table before anything is sent. Validation errors are
//! only reported for fields the user has touched, except after an invalid
//! submit, which marks every field touched.
//!
//! # Rules
//!
//! | Field             | Rule                          |
//! |-------------------|-------------------------------|
//! | name              | required, at least 3 chars    |
//! | publisher         | required                      |
//! | secret identity   | required                      |
//! | first appearance  | required                      |
//! | image, alt image  | optional                      |
//!
//! Whitespace-only input counts as empty.
//!
//! A valid submit creates or updates the hero, reloads the list exactly once,
//! then navigates back to the list.

use super::modes::FormTarget;
use super::routes::{Navigator, Route};
use super::state::HeroList;
use crate::domain::error::Result;
use crate::domain::{Hero, HeroDraft};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Publisher,
    SecretIdentity,
    FirstAppearance,
    Image,
    AltImage,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Publisher,
        Self::SecretIdentity,
        Self::FirstAppearance,
        Self::Image,
        Self::AltImage,
    ];

    /// Short key used by the terminal front end (`name=Batman`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Publisher => "publisher",
            Self::SecretIdentity => "identity",
            Self::FirstAppearance => "first",
            Self::Image => "img",
            Self::AltImage => "alt_img",
        }
    }

    /// Resolves a key produced by [`Field::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Publisher => "Publisher",
            Self::SecretIdentity => "Secret identity",
            Self::FirstAppearance => "First appearance",
            Self::Image => "Image",
            Self::AltImage => "Alternative image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct FieldRule {
    field: Field,
    min_len: usize,
}

/// Required fields and their minimum lengths. Fields not listed are optional.
const RULES: [FieldRule; 4] = [
    FieldRule { field: Field::Name, min_len: 3 },
    FieldRule { field: Field::Publisher, min_len: 1 },
    FieldRule { field: Field::SecretIdentity, min_len: 1 },
    FieldRule { field: Field::FirstAppearance, min_len: 1 },
];

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
        }
    }
}

/// Plain editable values behind the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroRecord {
    pub name: String,
    pub publisher: String,
    pub secret_identity: String,
    pub first_appearance: String,
    pub image: String,
    pub alt_image: String,
}

impl HeroRecord {
    /// Copies a stored hero into editable values.
    #[must_use]
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            name: hero.name.clone(),
            publisher: hero.publisher.clone(),
            secret_identity: hero.secret_identity.clone(),
            first_appearance: hero.first_appearance.clone(),
            image: hero.image.clone().unwrap_or_default(),
            alt_image: hero.alt_image.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Publisher => &self.publisher,
            Field::SecretIdentity => &self.secret_identity,
            Field::FirstAppearance => &self.first_appearance,
            Field::Image => &self.image,
            Field::AltImage => &self.alt_image,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Publisher => &mut self.publisher,
            Field::SecretIdentity => &mut self.secret_identity,
            Field::FirstAppearance => &mut self.first_appearance,
            Field::Image => &mut self.image,
            Field::AltImage => &mut self.alt_image,
        };
        *slot = value.into();
    }

    /// Checks every rule and returns the failures keyed by field.
    #[must_use]
    pub fn validate(&self) -> BTreeMap<Field, FieldError> {
        RULES
            .iter()
            .filter_map(|rule| {
                let len = self.get(rule.field).trim().chars().count();
                let error = if len == 0 {
                    FieldError::Required
                } else if len < rule.min_len {
                    FieldError::TooShort { min: rule.min_len }
                } else {
                    return None;
                };
                Some((rule.field, error))
            })
            .collect()
    }

    /// Converts the values into a draft. Blank image references become `None`.
    #[must_use]
    pub fn to_draft(&self) -> HeroDraft {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        HeroDraft {
            name: self.name.clone(),
            secret_identity: self.secret_identity.clone(),
            publisher: self.publisher.clone(),
            first_appearance: self.first_appearance.clone(),
            image: optional(&self.image),
            alt_image: optional(&self.alt_image),
        }
    }
}

/// Result of [`HeroForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The hero was stored; carries the backend's copy.
    Saved(Hero),
    /// Validation failed; nothing was sent.
    Invalid(BTreeMap<Field, FieldError>),
}

/// Form state for creating or editing one hero.
pub struct HeroForm {
    target: FormTarget,
    list: Arc<HeroList>,
    navigator: Arc<dyn Navigator>,
    record: HeroRecord,
    touched: BTreeSet<Field>,

    /// Hero as loaded for editing.
    loaded: Option<Hero>,
}

impl HeroForm {
    #[must_use]
    pub fn new(target: FormTarget, list: Arc<HeroList>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            target,
            list,
            navigator,
            record: HeroRecord::default(),
            touched: BTreeSet::new(),
            loaded: None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &FormTarget {
        &self.target
    }

    #[must_use]
    pub const fn record(&self) -> &HeroRecord {
        &self.record
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&Hero> {
        self.loaded.as_ref()
    }

    /// Fills the form from the backend when editing. Does nothing when creating.
    ///
    /// A `null` response leaves the form empty.
    ///
    /// # Errors
    ///
    /// Propagates the fetch failure; the form is left unchanged.
    pub async fn load(&mut self) -> Result<()> {
        let FormTarget::Edit(id) = &self.target else {
            return Ok(());
        };
        if let Some(hero) = self.list.client().get_by_id(id).await? {
            tracing::debug!(hero_id = %hero.id, "form loaded");
            self.record = HeroRecord::from_hero(&hero);
            self.loaded = Some(hero);
        } else {
            tracing::debug!(hero_id = %id, "hero to edit not found, form left empty");
        }
        Ok(())
    }

    /// Updates one field and marks it touched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        self.touched.insert(field);
    }

    /// Returns the validation error for `field`, but only once it was touched.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.record.validate().remove(&field)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.record.validate().is_empty()
    }

    /// Validates and saves the form.
    ///
    /// An invalid form marks every field touched and sends nothing. A valid
    /// one is created or updated, the list is reloaded once, and the user is
    /// sent back to the list.
    ///
    /// # Errors
    ///
    /// Propagates a failed create or update. No reload or navigation happens
    /// in that case. A failed reload after a successful save is only logged.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = self.record.validate();
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "form invalid, nothing sent");
            self.touched.extend(Field::ALL);
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let client = self.list.client();
        let saved = match &self.target {
            FormTarget::New => client.create(&self.record.to_draft()).await?,
            FormTarget::Edit(id) => {
                let id = self.loaded.as_ref().map_or(id.as_str(), |hero| hero.id.as_str());
                let hero = Hero::from_draft(id, self.record.to_draft());
                client.update(&hero).await?
            }
        };
        tracing::debug!(hero_id = %saved.id, "hero saved");

        if let Err(e) = self.list.reload().await {
            tracing::warn!(error = %e, "reload after save failed");
        }
        self.navigator.navigate(Route::List);
        Ok(SubmitOutcome::Saved(saved))
    }

    /// Leaves the form without saving.
    pub fn go_back(&self) {
        self.navigator.navigate(Route::List);
    }
}

impl fmt::Debug for HeroForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroForm")
            .field("target", &self.target)
            .field("record", &self.record)
            .field("touched", &self.touched)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::HeroesClient;
    use crate::test_support::{batman, superman, FakeBackend};
    use crate::transport::Method;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn form_over(
        backend: &FakeBackend,
        target: FormTarget,
    ) -> (HeroForm, Arc<HeroList>, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let list = Arc::new(HeroList::new(HeroesClient::new(Arc::new(backend.clone()))));
        (HeroForm::new(target, Arc::clone(&list), Arc::new(tx)), list, rx)
    }

    fn fill(form: &mut HeroForm) {
        form.set_field(Field::Name, "Wonder Woman");
        form.set_field(Field::Publisher, "DC Comics");
        form.set_field(Field::SecretIdentity, "Diana Prince");
        form.set_field(Field::FirstAppearance, "1941");
    }

    #[test]
    fn rules_reject_blank_and_short_values() {
        let mut record = HeroRecord::default();
        record.set(Field::Name, "Ab");
        record.set(Field::Publisher, "   ");
        record.set(Field::SecretIdentity, "X");
        record.set(Field::FirstAppearance, "1962");

        let errors = record.validate();
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::TooShort { min: 3 }));
        assert_eq!(errors.get(&Field::Publisher), Some(&FieldError::Required));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn blank_image_references_are_dropped_from_the_draft() {
        let mut record = HeroRecord::from_hero(&batman());
        record.set(Field::Image, "  ");
        record.set(Field::AltImage, "bat.png");
        let draft = record.to_draft();
        assert_eq!(draft.image, None);
        assert_eq!(draft.alt_image.as_deref(), Some("bat.png"));
    }

    #[test]
    fn field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("power"), None);
    }

    #[tokio::test]
    async fn errors_show_only_for_touched_fields() {
        let backend = FakeBackend::default();
        let (mut form, _, _) = form_over(&backend, FormTarget::New);

        assert_eq!(form.field_error(Field::Name), None);
        form.set_field(Field::Name, "Bo");
        assert_eq!(form.field_error(Field::Name), Some(FieldError::TooShort { min: 3 }));
        assert_eq!(form.field_error(Field::Publisher), None);
    }

    #[tokio::test]
    async fn invalid_submit_touches_everything_and_sends_nothing() {
        let backend = FakeBackend::default();
        let (mut form, _, mut routes) = form_over(&backend, FormTarget::New);

        let outcome = form.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(ref errors) if errors.len() == 4));
        assert_eq!(form.field_error(Field::Publisher), Some(FieldError::Required));
        assert_eq!(form.field_error(Field::Image), None);
        assert!(backend.requests().is_empty());
        assert!(routes.try_recv().is_err());
    }

    #[tokio::test]
    async fn create_reloads_once_then_returns_to_the_list() {
        let backend = FakeBackend::with_heroes(vec![batman()]);
        let (mut form, list, mut routes) = form_over(&backend, FormTarget::New);
        fill(&mut form);

        let SubmitOutcome::Saved(saved) = form.submit().await.unwrap() else {
            panic!("expected a saved hero");
        };
        assert_eq!(saved.id, "101");
        assert_eq!(
            backend.requests(),
            vec![(Method::Post, "/heroes".to_string()), (Method::Get, "/heroes".to_string())]
        );
        assert_eq!(list.len(), 2);
        assert_eq!(routes.try_recv().unwrap(), Route::List);
    }

    #[tokio::test]
    async fn edit_loads_then_updates_with_the_same_id() {
        let backend = FakeBackend::with_heroes(vec![batman(), superman()]);
        let (mut form, list, mut routes) = form_over(&backend, FormTarget::Edit("2".into()));

        form.load().await.unwrap();
        assert_eq!(form.record(), &HeroRecord::from_hero(&superman()));
        assert_eq!(form.loaded(), Some(&superman()));

        form.set_field(Field::Name, "Superman Prime");
        let SubmitOutcome::Saved(saved) = form.submit().await.unwrap() else {
            panic!("expected a saved hero");
        };
        assert_eq!(saved.id, "2");
        assert_eq!(saved.secret_identity, "Clark Kent");
        assert_eq!(backend.count(Method::Put, "/heroes/2"), 1);
        assert_eq!(backend.count(Method::Get, "/heroes"), 1);
        assert_eq!(list.snapshot()[1].name, "Superman Prime");
        assert_eq!(routes.try_recv().unwrap(), Route::List);
    }

    #[tokio::test]
    async fn new_form_load_is_a_no_op() {
        let backend = FakeBackend::with_heroes(vec![batman()]);
        let (mut form, _, _) = form_over(&backend, FormTarget::New);
        form.load().await.unwrap();
        assert!(backend.requests().is_empty());
        assert_eq!(form.record(), &HeroRecord::default());
    }

    #[tokio::test]
    async fn failed_save_propagates_without_reload_or_navigation() {
        let backend = FakeBackend::with_heroes(vec![batman()]);
        backend.fail(Method::Post, "/heroes", 500);
        let (mut form, _, mut routes) = form_over(&backend, FormTarget::New);
        fill(&mut form);

        let err = form.submit().await.unwrap_err();
        assert_eq!(err.status(), 500);
        assert_eq!(backend.count(Method::Get, "/heroes"), 0);
        assert!(routes.try_recv().is_err());
    }

    #[tokio::test]
    async fn go_back_navigates_without_saving() {
        let backend = FakeBackend::default();
        let (mut form, _, mut routes) = form_over(&backend, FormTarget::New);
        fill(&mut form);
        form.go_back();
        assert_eq!(routes.try_recv().unwrap(), Route::List);
        assert!(backend.requests().is_empty());
    }
}
