//! Centralized application directory paths for punchlist.
//!
//! Provides a single source of truth for all filesystem paths used by the
//! client. Uses the [`dirs`] crate for platform-appropriate directory
//! resolution, which is sandbox-transparent on macOS (returns
//! container-relative paths under App Sandbox automatically).
//!
//! # Directory Layout
//!
//! | Purpose | macOS (sandbox) | Linux |
//! |---------|----------------|-------|
//! | App data | `~/Library/Application Support/punchlist/` | `~/.local/share/punchlist/` |
//! | Config | `~/Library/Application Support/punchlist/` | `~/.config/punchlist/` |
//!
//! # Environment Overrides
//!
//! All paths can be overridden for testing or custom deployments:
//! - `PUNCHLIST_DATA_DIR` — overrides [`data_dir`]
//! - `PUNCHLIST_CONFIG_DIR` — overrides [`config_dir`]

use std::path::PathBuf;

/// Application data root directory.
///
/// Used for persistent user data: the session token and log files.
///
/// Resolves to `dirs::data_dir()/punchlist/` by default. Override with
/// the `PUNCHLIST_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("PUNCHLIST_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("punchlist"))
        .unwrap_or_else(|| PathBuf::from("/tmp/punchlist-data"))
}

/// Application config directory.
///
/// Used for `config.toml`.
///
/// Resolves to `dirs::config_dir()/punchlist/` by default. Override with
/// the `PUNCHLIST_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("PUNCHLIST_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("punchlist"))
        .unwrap_or_else(|| PathBuf::from("/tmp/punchlist-config"))
}

/// Log file directory (`data_dir()/logs/`).
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Session token file path (`data_dir()/token`).
///
/// Holds the raw bearer token issued at login; absence means no session.
#[must_use]
pub fn token_file() -> PathBuf {
    data_dir().join("token")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_nonempty() {
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn config_dir_is_nonempty() {
        let dir = config_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn config_file_ends_with_config_toml() {
        let path = config_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("config.toml"), "config_file: {s}");
    }

    #[test]
    fn token_file_ends_with_token() {
        let path = token_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("token"), "token_file: {s}");
    }

    #[test]
    fn logs_dir_is_subpath_of_data_dir() {
        let logs = logs_dir();
        let data = data_dir();
        assert!(
            logs.starts_with(&data),
            "logs_dir ({}) should start with data_dir ({})",
            logs.display(),
            data.display()
        );
    }

    #[test]
    fn token_file_is_subpath_of_data_dir() {
        let token = token_file();
        let data = data_dir();
        assert!(
            token.starts_with(&data),
            "token_file ({}) should start with data_dir ({})",
            token.display(),
            data.display()
        );
    }

    #[test]
    fn data_dir_override_via_env() {
        let key = "PUNCHLIST_DATA_DIR";
        let original = std::env::var_os(key);

        // SAFETY: Tests run single-threaded per module.
        unsafe { std::env::set_var(key, "/custom/data") };
        let result = data_dir();
        assert_eq!(result, PathBuf::from("/custom/data"));

        // Restore.
        match original {
            Some(val) => unsafe { std::env::set_var(key, val) },
            None => unsafe { std::env::remove_var(key) },
        }
    }

    #[test]
    fn config_dir_override_via_env() {
        let key = "PUNCHLIST_CONFIG_DIR";
        let original = std::env::var_os(key);

        unsafe { std::env::set_var(key, "/custom/config") };
        let result = config_dir();
        assert_eq!(result, PathBuf::from("/custom/config"));

        match original {
            Some(val) => unsafe { std::env::set_var(key, val) },
            None => unsafe { std::env::remove_var(key) },
        }
    }
}
