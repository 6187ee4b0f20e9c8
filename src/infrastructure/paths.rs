//! Path utilities: tilde expansion and data directory resolution.

use crate::Config;
use std::path::PathBuf;

/// Data directory used when the configuration names none.
pub const DEFAULT_DATA_DIR: &str = "~/.local/share/wanderlog";

/// Returns the directory holding the trip store and the log file.
///
/// Uses `config.data_dir` when set, otherwise [`DEFAULT_DATA_DIR`]; either is
/// tilde-expanded.
///
/// # Examples
///
/// ```
/// use wanderlog::infrastructure::get_data_dir;
/// use wanderlog::Config;
///
/// let config = Config {
///     data_dir: Some("/var/lib/wanderlog".to_string()),
///     ..Config::default()
/// };
/// assert_eq!(get_data_dir(&config).to_str(), Some("/var/lib/wanderlog"));
/// ```
#[must_use]
pub fn get_data_dir(config: &Config) -> PathBuf {
    let raw = config.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR);
    PathBuf::from(expand_tilde(raw))
}

/// Expands a leading `~` to the user's home directory (`$HOME`).
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use wanderlog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_under_home() {
        let dir = get_data_dir(&Config::default());
        if let Some(home) = std::env::var_os("HOME") {
            assert!(dir.starts_with(home));
        }
        assert!(dir.ends_with(".local/share/wanderlog"));
    }

    #[test]
    fn tilde_only_expands_at_start() {
        if let Some(home) = std::env::var_os("HOME") {
            let home = home.to_string_lossy().trim_end_matches('/').to_string();
            assert_eq!(expand_tilde("~/trips"), format!("{home}/trips"));
        }
        assert_eq!(expand_tilde("a~/b"), "a~/b");
    }
}
