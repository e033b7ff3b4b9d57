//! Wire types for the task-list backend API.
//!
//! Field names match the backend's JSON exactly; unknown extra fields in
//! responses are ignored.

use serde::{Deserialize, Serialize};

/// A single to-do entry, owned server-side.
///
/// The client only ever holds a transient copy, fully replaced on every
/// refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub is_done: bool,
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated requests.
    pub access_token: String,
}

/// Response body of `POST /auth/register`.
///
/// The backend sends a confirmation message; the client treats it as
/// informational only.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Overall status, `"ok"` when the backend is serving.
    pub status: String,
    /// Backend service name.
    #[serde(default)]
    pub service: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn task_deserializes_from_backend_shape() {
        let task: Task =
            serde_json::from_str(r#"{"id": 7, "title": "buy milk", "is_done": false}"#).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "buy milk");
        assert!(!task.is_done);
    }

    #[test]
    fn task_ignores_unknown_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id": 1, "title": "x", "is_done": true, "owner_id": 42, "created_at": "2026-01-01"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 1);
        assert!(task.is_done);
    }

    #[test]
    fn login_response_extracts_access_token() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"access_token": "tok-123", "token_type": "bearer"}"#).unwrap();
        assert_eq!(parsed.access_token, "tok-123");
    }

    #[test]
    fn register_response_tolerates_missing_message() {
        let parsed: RegisterResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_none());
    }

    #[test]
    fn health_status_parses_backend_payload() {
        let parsed: HealthStatus =
            serde_json::from_str(r#"{"status": "ok", "service": "backend-api"}"#).unwrap();
        assert_eq!(parsed.status, "ok");
        assert_eq!(parsed.service, "backend-api");
    }
}
