//! Application controller: UI state and the operation cycle.
//!
//! [`App`] owns everything the front-end renders: the authentication flag,
//! the task list, form drafts, the last error message, and the loading
//! flag. Every backend-touching method follows the same cycle: clear the
//! error, raise `loading`, perform exactly one API call, apply the result
//! or record the failure message, drop `loading`.
//!
//! Mutations never patch the local list. After a successful create, toggle,
//! or delete the full list is re-fetched and replaces local state wholesale,
//! so the client can never drift from backend reality further than one
//! failed refresh. A successful write whose follow-up refresh fails
//! therefore surfaces the fetch error, not the write's.

use crate::api::{ApiClient, Task};

/// Aggregate counts derived from the task list, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Tasks not yet done.
    pub open: usize,
    /// Tasks marked done.
    pub done: usize,
    /// All tasks.
    pub total: usize,
}

/// In-memory UI state and the operations that drive it.
#[derive(Debug)]
pub struct App {
    api: ApiClient,
    /// Whether a session is active. Flips on login/register success and
    /// on logout; seeded at startup from the stored token's presence.
    pub authed: bool,
    /// Current task list, replaced wholesale on every refresh.
    pub items: Vec<Task>,
    /// Draft title for a new task.
    pub title: String,
    /// Username draft on the auth screen.
    pub username: String,
    /// Password draft on the auth screen.
    pub password: String,
    /// Last failure message; empty after a successful operation.
    pub error: String,
    /// True while an operation is in flight.
    pub loading: bool,
}

impl App {
    /// Create the controller over an API client.
    ///
    /// Starts authenticated when a token is already stored; the caller is
    /// expected to [`refresh`](Self::refresh) once in that case to populate
    /// the list.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let authed = api.is_authenticated();
        Self {
            api,
            authed,
            items: Vec::new(),
            title: String::new(),
            username: String::new(),
            password: String::new(),
            error: String::new(),
            loading: false,
        }
    }

    /// Aggregate counts for the header badge.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let done = self.items.iter().filter(|t| t.is_done).count();
        let total = self.items.len();
        TaskStats {
            open: total - done,
            done,
            total,
        }
    }

    /// Whether the add form may submit: not loading and a non-blank title.
    #[must_use]
    pub fn can_add_task(&self) -> bool {
        !self.loading && !self.title.trim().is_empty()
    }

    /// Whether the auth form may submit: not loading, a non-blank
    /// username, and a non-empty password.
    #[must_use]
    pub fn can_submit_auth(&self) -> bool {
        !self.loading && self.auth_form_complete()
    }

    fn auth_form_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Re-fetch the whole task list, replacing local state.
    pub async fn refresh(&mut self) {
        self.error.clear();
        self.loading = true;
        match self.api.list_tasks().await {
            Ok(items) => self.items = items,
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
    }

    /// Log in with the current drafts, then load the task list.
    ///
    /// Silent no-op while the auth form is incomplete. The entry refresh
    /// runs as its own cycle, so a login that succeeds against a backend
    /// whose list endpoint then fails still transitions to authenticated,
    /// with the fetch error showing.
    pub async fn login(&mut self) {
        if !self.auth_form_complete() {
            return;
        }
        self.error.clear();
        self.loading = true;
        let username = self.username.trim().to_owned();
        match self.api.login(&username, &self.password).await {
            Ok(_) => self.authed = true,
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
        if self.authed {
            self.refresh().await;
        }
    }

    /// Register with the current drafts, log in, then load the task list.
    ///
    /// Registration and the follow-up login share one cycle; whichever
    /// call fails supplies the error message.
    pub async fn register(&mut self) {
        if !self.auth_form_complete() {
            return;
        }
        self.error.clear();
        self.loading = true;
        let username = self.username.trim().to_owned();
        match self.api.register(&username, &self.password).await {
            Ok(_) => match self.api.login(&username, &self.password).await {
                Ok(_) => self.authed = true,
                Err(err) => self.error = err.to_string(),
            },
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
        if self.authed {
            self.refresh().await;
        }
    }

    /// Create a task from the title draft, then re-fetch the list.
    ///
    /// Silent no-op when the trimmed draft is blank; the draft is cleared
    /// only after the backend accepts the task.
    pub async fn add_task(&mut self) {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return;
        }
        self.error.clear();
        self.loading = true;
        match self.api.create_task(&title).await {
            Ok(_) => {
                self.title.clear();
                self.refresh().await;
            }
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
    }

    /// Set a task's completion flag, then re-fetch the list.
    pub async fn toggle_task(&mut self, id: i64, is_done: bool) {
        self.error.clear();
        self.loading = true;
        match self.api.toggle_task(id, is_done).await {
            Ok(_) => self.refresh().await,
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
    }

    /// Delete a task, then re-fetch the list.
    pub async fn delete_task(&mut self, id: i64) {
        self.error.clear();
        self.loading = true;
        match self.api.delete_task(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
    }

    /// End the session: drop the stored token and reset every state field
    /// to its initial value. No network call; cannot fail.
    pub fn logout(&mut self) {
        self.api.logout();
        self.authed = false;
        self.items.clear();
        self.title.clear();
        self.username.clear();
        self.password.clear();
        self.error.clear();
        self.loading = false;
    }
}
