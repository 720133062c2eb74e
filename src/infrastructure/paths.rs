//! Filesystem locations used by heroboard.
//!
//! The data directory holds the rotating log. It is chosen from, in order:
//!
//! 1. `HEROBOARD_DATA_DIR` (tilde-expanded)
//! 2. `$HOME/.local/share/heroboard`
//! 3. `<temp dir>/heroboard`

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HEROBOARD_DATA_DIR";

/// Returns the data directory for heroboard files.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var(DATA_DIR_ENV).ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )
}

/// Resolves the data directory from an explicit override and a home directory.
///
/// # Examples
///
/// ```
/// use heroboard::infrastructure::resolve_data_dir;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     resolve_data_dir(None, Some("/home/ada")),
///     PathBuf::from("/home/ada/.local/share/heroboard"),
/// );
/// assert_eq!(
///     resolve_data_dir(Some("~/hb"), Some("/home/ada")),
///     PathBuf::from("/home/ada/hb"),
/// );
/// ```
#[must_use]
pub fn resolve_data_dir(override_dir: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir.map(str::trim).filter(|d| !d.is_empty()) {
        return PathBuf::from(expand_tilde(dir, home));
    }
    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(".local").join("share").join("heroboard"),
        None => std::env::temp_dir().join("heroboard"),
    }
}

/// Expands a leading `~` to `home`.
///
/// Paths are returned unchanged when there is no home directory.
///
/// # Examples
///
/// ```
/// use heroboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/projects", Some("/home/ada")), "/home/ada/projects");
/// assert_eq!(expand_tilde("~", Some("/home/ada")), "/home/ada");
/// assert_eq!(expand_tilde("/absolute/path", Some("/home/ada")), "/absolute/path");
/// assert_eq!(expand_tilde("~/projects", None), "~/projects");
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
