//! Durable session storage for the login credential.
//!
//! The backend issues an opaque bearer token at login; this module persists
//! it as a plain file named `token` under the application data directory.
//! Presence of the file is the sole source of truth for "already logged in"
//! at startup. There is no refresh or expiry tracking client-side: a stale
//! token simply fails at the API layer until the user logs out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs;
use crate::error::SessionError;

/// File-backed holder of the bearer token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over an explicit token file path.
    ///
    /// Tests point this at a temp directory; production code uses
    /// [`SessionStore::open_default`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over the default token location
    /// (`data_dir()/token`).
    #[must_use]
    pub fn open_default() -> Self {
        Self::new(app_dirs::token_file())
    }

    /// Path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, if any.
    ///
    /// Returns `None` when the file is absent or holds only whitespace.
    /// Read failures other than not-found are logged and treated as
    /// absent so a corrupt file cannot prevent startup.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable token file, treating as logged out");
                None
            }
        }
    }

    /// `true` when a token is stored.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.load().is_some()
    }

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, token.trim()).map_err(|source| SessionError {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove the stored token.
    ///
    /// Logout must never fail: a missing file counts as success and any
    /// other filesystem error is logged and swallowed.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "could not remove token file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("token"))
    }

    #[test]
    fn load_returns_none_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), None);
        assert!(!store.is_present());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("abc123").unwrap();
        assert_eq!(store.load(), Some("abc123".to_owned()));
        assert!(store.is_present());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("deeper").join("token"));
        store.save("tok").unwrap();
        assert_eq!(store.load(), Some("tok".to_owned()));
    }

    #[test]
    fn save_overwrites_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load(), Some("second".to_owned()));
    }

    #[test]
    fn token_is_stored_and_loaded_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("  padded \n").unwrap();
        assert_eq!(store.load(), Some("padded".to_owned()));
    }

    #[test]
    fn whitespace_only_file_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  \n\t ").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_removes_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("tok").unwrap();
        store.clear();
        assert_eq!(store.load(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_is_idempotent_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn fresh_store_over_same_path_sees_saved_token() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save("persisted").unwrap();
        let reopened = store_in(&dir);
        assert_eq!(reopened.load(), Some("persisted".to_owned()));
    }
}
