//! Search filtering over hero lists.
//!
//! Filtering is a pure read over a snapshot: a hero matches when the trimmed,
//! lower-cased term is a substring of its name, secret identity or publisher.
//! A blank term matches everything and preserves the input order.

use crate::domain::Hero;

/// Filters `heroes` by `term`, keeping input order.
///
/// # Example
///
/// ```
/// use heroboard::{search::filter_heroes, Hero};
///
/// let heroes: Vec<Hero> = serde_json::from_str(
///     r#"[{"id":"1","superhero":"Batman","alter_ego":"Bruce Wayne","publisher":"DC Comics"}]"#,
/// )?;
/// assert_eq!(filter_heroes(&heroes, "  BAT ").len(), 1);
/// assert_eq!(filter_heroes(&heroes, "marvel").len(), 0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn filter_heroes<'a>(heroes: &'a [Hero], term: &str) -> Vec<&'a Hero> {
    let needle = normalize_term(term);
    if needle.is_empty() {
        return heroes.iter().collect();
    }

    let _span = tracing::trace_span!("filter_heroes", total = heroes.len()).entered();
    heroes.iter().filter(|hero| matches_term(hero, &needle)).collect()
}

/// Trims and lower-cases a raw search term.
#[must_use]
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Returns `true` if the hero matches an already normalized term.
#[must_use]
pub fn matches_term(hero: &Hero, needle: &str) -> bool {
    [&hero.name, &hero.secret_identity, &hero.publisher]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hero(id: &str, name: &str, identity: &str, publisher: &str) -> Hero {
        Hero {
            id: id.into(),
            name: name.into(),
            secret_identity: identity.into(),
            publisher: publisher.into(),
            first_appearance: String::new(),
            image: None,
            alt_image: None,
        }
    }

    fn roster() -> Vec<Hero> {
        vec![
            hero("1", "Batman", "Bruce Wayne", "DC Comics"),
            hero("2", "Superman", "Clark Kent", "DC Comics"),
            hero("3", "Spider-Man", "Peter Parker", "Marvel Comics"),
            hero("4", "Batwoman", "Kate Kane", "DC Comics"),
        ]
    }

    fn ids(found: &[&Hero]) -> Vec<String> {
        found.iter().map(|h| h.id.clone()).collect()
    }

    #[test]
    fn matching_ignores_case() {
        let heroes = roster();
        let lower = ids(&filter_heroes(&heroes, "bat"));
        assert_eq!(lower, vec!["1", "4"]);
        assert_eq!(ids(&filter_heroes(&heroes, "BAT")), lower);
        assert_eq!(ids(&filter_heroes(&heroes, "BaT")), lower);
    }

    #[test]
    fn blank_terms_return_everything_in_order() {
        let heroes = roster();
        let all: Vec<&Hero> = heroes.iter().collect();
        assert_eq!(filter_heroes(&heroes, ""), all);
        assert_eq!(filter_heroes(&heroes, "   "), all);
    }

    #[test]
    fn term_is_trimmed_before_matching() {
        let heroes = roster();
        assert_eq!(ids(&filter_heroes(&heroes, "  parker  ")), vec!["3"]);
    }

    #[test]
    fn searches_identity_and_publisher() {
        let heroes = roster();
        assert_eq!(ids(&filter_heroes(&heroes, "kent")), vec!["2"]);
        assert_eq!(ids(&filter_heroes(&heroes, "marvel")), vec!["3"]);
        assert_eq!(ids(&filter_heroes(&heroes, "dc")), vec!["1", "2", "4"]);
    }

    #[test]
    fn first_appearance_is_not_searched() {
        let mut heroes = roster();
        heroes[0].first_appearance = "1939".into();
        assert!(filter_heroes(&heroes, "1939").is_empty());
    }
}
