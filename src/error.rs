//! Error types for the punchlist client.

use std::path::PathBuf;

/// Failure of one backend operation.
///
/// Each variant's display string is the exact message shown in the UI.
/// All HTTP-level failures of an operation collapse into that operation's
/// variant regardless of status code; the underlying [`reqwest::Error`]
/// is kept as the source for logs only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Account registration was rejected or unreachable.
    #[error("Register failed")]
    Register(#[source] reqwest::Error),

    /// Credential exchange was rejected or unreachable.
    #[error("Login failed")]
    Login(#[source] reqwest::Error),

    /// Task list could not be retrieved.
    #[error("Failed to fetch items")]
    FetchItems(#[source] reqwest::Error),

    /// Task creation was rejected or unreachable.
    #[error("Failed to create item")]
    CreateItem(#[source] reqwest::Error),

    /// Task completion toggle was rejected or unreachable.
    #[error("Failed to update item")]
    UpdateItem(#[source] reqwest::Error),

    /// Task deletion was rejected or unreachable.
    #[error("Failed to delete item")]
    DeleteItem(#[source] reqwest::Error),

    /// Backend health probe failed.
    #[error("Health check failed")]
    Health(#[source] reqwest::Error),

    /// The session token could not be persisted after login.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Failure writing the session token file.
#[derive(Debug, thiserror::Error)]
#[error("failed to store session token at {}", path.display())]
pub struct SessionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure loading or writing the client configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration content.
    #[error("config error: {0}")]
    Parse(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ApiError>;
