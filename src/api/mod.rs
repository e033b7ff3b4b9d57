//! HTTP client for the task-list backend.
//!
//! Thin translation layer: one method per backend operation, no retries,
//! no client-side timeouts, no status-code taxonomy. Every failure mode of
//! an operation (connection error, non-success status, undecodable body)
//! collapses into that operation's [`ApiError`] variant, so callers show
//! one fixed message per operation and nothing else.
//!
//! The client owns the [`SessionStore`]: `login` persists the issued
//! bearer token, `logout` removes it, and every `/api/` request attaches
//! `Authorization: Bearer <token>` when a token is stored (the header is
//! omitted entirely when it is not).

mod types;

pub use types::{HealthStatus, LoginResponse, RegisterResponse, Task};

use serde_json::json;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Client for one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client from the configured base URL and a session store.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
            session,
        }
    }

    /// The session store backing this client.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `true` when a bearer token is currently stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_present()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the stored bearer token, when present.
    fn auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.load() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send a request and map any failure into `wrap`.
    async fn execute(
        op: &'static str,
        request: reqwest::RequestBuilder,
        wrap: fn(reqwest::Error) -> ApiError,
    ) -> Result<reqwest::Response> {
        match request.send().await.and_then(reqwest::Response::error_for_status) {
            Ok(response) => Ok(response),
            Err(source) => {
                tracing::warn!(op, %source, "backend request failed");
                Err(wrap(source))
            }
        }
    }

    // ── Auth ──────────────────────────────────────────────────────

    /// Create an account. Does not log in or store a credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Register`] on any transport or HTTP failure.
    pub async fn register(&self, username: &str, password: &str) -> Result<RegisterResponse> {
        let url = self.endpoint("/auth/register");
        tracing::debug!(%url, username, "registering account");
        let request = self
            .http
            .post(&url)
            .json(&json!({"username": username, "password": password}));
        let response = Self::execute("register", request, ApiError::Register).await?;
        response.json().await.map_err(ApiError::Register)
    }

    /// Exchange credentials for a bearer token and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Login`] on any transport or HTTP failure, or
    /// [`ApiError::Session`] if the issued token cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.endpoint("/auth/login");
        tracing::debug!(%url, username, "logging in");
        let request = self
            .http
            .post(&url)
            .json(&json!({"username": username, "password": password}));
        let response = Self::execute("login", request, ApiError::Login).await?;
        let parsed: LoginResponse = response.json().await.map_err(ApiError::Login)?;
        self.session.save(&parsed.access_token)?;
        Ok(parsed)
    }

    /// Drop the stored bearer token. No network call; cannot fail.
    pub fn logout(&self) {
        tracing::debug!("clearing stored session token");
        self.session.clear();
    }

    // ── Tasks ─────────────────────────────────────────────────────

    /// Fetch the full task list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FetchItems`] on any transport or HTTP failure.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.endpoint("/api/items");
        tracing::debug!(%url, "fetching task list");
        let request = self.auth(self.http.get(&url));
        let response = Self::execute("list_tasks", request, ApiError::FetchItems).await?;
        response.json().await.map_err(ApiError::FetchItems)
    }

    /// Create a task with the given title, initially not done.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::CreateItem`] on any transport or HTTP failure.
    pub async fn create_task(&self, title: &str) -> Result<Task> {
        let url = self.endpoint("/api/items");
        tracing::debug!(%url, title, "creating task");
        let request = self
            .auth(self.http.post(&url))
            .json(&json!({"title": title, "is_done": false}));
        let response = Self::execute("create_task", request, ApiError::CreateItem).await?;
        response.json().await.map_err(ApiError::CreateItem)
    }

    /// Set a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UpdateItem`] on any transport or HTTP failure.
    pub async fn toggle_task(&self, id: i64, is_done: bool) -> Result<Task> {
        let url = self.endpoint(&format!("/api/items/{id}"));
        tracing::debug!(%url, is_done, "updating task");
        let request = self.auth(self.http.put(&url)).json(&json!({"is_done": is_done}));
        let response = Self::execute("toggle_task", request, ApiError::UpdateItem).await?;
        response.json().await.map_err(ApiError::UpdateItem)
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DeleteItem`] on any transport or HTTP failure.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let url = self.endpoint(&format!("/api/items/{id}"));
        tracing::debug!(%url, "deleting task");
        let request = self.auth(self.http.delete(&url));
        Self::execute("delete_task", request, ApiError::DeleteItem).await?;
        Ok(())
    }

    // ── Diagnostics ───────────────────────────────────────────────

    /// Probe the backend's health endpoint. Unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Health`] on any transport or HTTP failure.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/health");
        tracing::debug!(%url, "checking backend health");
        let response = Self::execute("health", self.http.get(&url), ApiError::Health).await?;
        response.json().await.map_err(ApiError::Health)
    }
}
