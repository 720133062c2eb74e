//! Heroboard: a terminal front end for a hero registry served over REST.
//!
//! Heroboard provides:
//! - A repository client for the `/heroes` resource (list, get, create, update, delete)
//! - A response notifier that turns request outcomes into toast notifications
//! - Debounced, case-insensitive search over the hero list
//! - A list state that is only ever replaced by a full reload, never patched
//! - A delete workflow gated behind explicit confirmation
//! - Detail and form views with validation

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - List page events, delete workflow                │
//! │  - Detail view, form validation                     │
//! │  - Routes and navigation                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Repository    │
//! │ (ui/)         │   │ (search/)     │   │ (repository/) │
//! │ - View models │   │ - Filtering   │   │ - HeroesClient│
//! │ - Rendering   │   │ - Debouncing  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Notifier (notifier/) wrapping Transport (transport/)│
//! │  - Success/error notifications per request          │
//! │  - reqwest HTTP client                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Hero model and errors (domain/)                  │
//! │  - Data directory paths (infrastructure/)           │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machines and navigation
//! - [`domain`]: Core domain types (Hero, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`notifier`]: Notification model, sinks, and the notifying transport
//! - [`repository`]: Entity repository client
//! - [`search`]: Term filtering and input debouncing
//! - [`transport`]: Transport boundary and the reqwest implementation
//! - [`ui`]: Plain text rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration comes from an optional TOML file, overlaid with environment
//! variables:
//!
//! ```toml
//! base_url = "http://localhost:3000"
//! search_debounce_ms = 500
//! notification_life_ms = 3000
//! request_timeout_secs = 30
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use heroboard::{search::filter_heroes, Hero};
//!
//! let heroes: Vec<Hero> = serde_json::from_str(
//!     r#"[{"id":"1","superhero":"Batman","alter_ego":"Bruce Wayne","publisher":"DC Comics"}]"#,
//! ).unwrap();
//! assert_eq!(filter_heroes(&heroes, "BRUCE").len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod notifier;
pub mod repository;
pub mod search;
pub mod transport;
pub mod ui;

pub mod observability;

#[cfg(test)]
mod test_support;

pub use app::{Event, HeroList, ListPage, Navigator, Route};
pub use domain::{Hero, HeroDraft, HeroboardError, Result};
pub use repository::HeroesClient;

use notifier::{NotificationSink, NotifyingTransport};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use transport::HttpTransport;

/// Environment variable overriding [`Config::base_url`].
pub const ENV_BASE_URL: &str = "HEROBOARD_BASE_URL";

/// Environment variable overriding [`Config::trace_level`].
pub const ENV_TRACE_LEVEL: &str = "HEROBOARD_TRACE_LEVEL";

/// Application configuration.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend origin; `/heroes` is appended per request.
    ///
    /// Default: `http://localhost:3000`
    pub base_url: String,

    /// Search debounce window in milliseconds. Default: 500
    pub search_debounce_ms: u64,

    /// How long a notification stays visible, in milliseconds. Default: 3000
    pub notification_life_ms: u64,

    /// Per-request timeout in seconds. Default: 30
    pub request_timeout_secs: u64,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            search_debounce_ms: 500,
            notification_life_ms: notifier::DEFAULT_LIFE_MS,
            request_timeout_secs: 30,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Numeric values that fail to parse fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use heroboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "http://api.local".to_string());
    /// map.insert("search_debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.base_url, "http://api.local");
    /// assert_eq!(config.search_debounce_ms, 250);
    /// assert_eq!(config.request_timeout_secs, 30);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: u64| {
            config.get(key).map_or(default, |raw| {
                raw.trim().parse::<u64>().unwrap_or_else(|_| {
                    tracing::debug!(key = key, value = %raw, "invalid number, using default");
                    default
                })
            })
        };

        Self {
            base_url: config
                .get("base_url")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.base_url),
            search_debounce_ms: number("search_debounce_ms", defaults.search_debounce_ms),
            notification_life_ms: number("notification_life_ms", defaults.notification_life_ms),
            request_timeout_secs: number("request_timeout_secs", defaults.request_timeout_secs),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HeroboardError::Io`] if the file cannot be read and
    /// [`HeroboardError::Config`] if it is not valid TOML for this shape.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| HeroboardError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlays `HEROBOARD_BASE_URL` and `HEROBOARD_TRACE_LEVEL`.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlays values from `lookup`, keyed by environment variable name.
    #[must_use]
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
        if let Some(level) = lookup(ENV_TRACE_LEVEL).filter(|s| !s.trim().is_empty()) {
            self.trace_level = Some(level);
        }
        self
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builds the repository client over HTTP with request notifications.
///
/// # Errors
///
/// Returns [`HeroboardError::Config`] if the HTTP client cannot be built.
pub fn build_client(config: &Config, sink: Arc<dyn NotificationSink>) -> Result<HeroesClient> {
    let http = HttpTransport::new(&config.base_url, config.request_timeout())?;
    let transport = NotifyingTransport::new(http, sink, config.notification_life_ms);
    Ok(HeroesClient::new(Arc::new(transport)))
}

/// Initializes the list page with configuration.
///
/// The list starts empty; send [`Event::Reload`] to fetch it.
///
/// # Errors
///
/// Propagates [`build_client`] failures.
///
/// # Example
///
/// ```rust
/// use heroboard::notifier::NotificationCenter;
/// use heroboard::{initialize, Config};
/// use std::sync::Arc;
///
/// let (routes, _rx) = tokio::sync::mpsc::unbounded_channel();
/// let page = initialize(&Config::default(), Arc::new(NotificationCenter::new()), Arc::new(routes))?;
/// assert!(page.list().is_empty());
/// # Ok::<(), heroboard::HeroboardError>(())
/// ```
pub fn initialize(
    config: &Config,
    sink: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
) -> Result<ListPage> {
    tracing::debug!(base_url = %config.base_url, "initializing heroboard");

    let client = build_client(config, sink)?;
    let list = Arc::new(HeroList::new(client));
    Ok(ListPage::new(list, navigator, config.search_debounce()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let map = BTreeMap::from([
            ("search_debounce_ms".to_string(), "soon".to_string()),
            ("notification_life_ms".to_string(), " 1500 ".to_string()),
            ("base_url".to_string(), "   ".to_string()),
        ]);
        let config = Config::from_map(&map);
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.notification_life_ms, 1500);
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn toml_file_keys_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://heroes.test\"\nrequest_timeout_secs = 5").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://heroes.test");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_debounce_ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::from_toml_file(file.path()),
            Err(HeroboardError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_toml_file(dir.path().join("absent.toml")),
            Err(HeroboardError::Io(_))
        ));
    }

    #[test]
    fn overrides_replace_url_and_level() {
        let config = Config::default().apply_overrides(|key| match key {
            ENV_BASE_URL => Some("http://override:9000".to_string()),
            ENV_TRACE_LEVEL => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://override:9000");
        assert_eq!(config.trace_level.as_deref(), Some("trace"));

        let untouched = Config::default().apply_overrides(|_| Some(" ".to_string()));
        assert_eq!(untouched, Config::default());
    }
}
