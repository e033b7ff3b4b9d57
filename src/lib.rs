//! punchlist: terminal client for an authenticated task-list REST API.
//!
//! A thin client in two layers plus a front-end:
//! - **API client**: one method per backend endpoint, bearer auth from a
//!   file-backed session store, one fixed error message per operation.
//! - **Controller**: the UI state machine (unauthenticated ↔ authenticated)
//!   and the uniform operation cycle with full-list refresh after every
//!   mutation.
//! - **TUI**: ratatui screens mapping key events onto controller
//!   operations.

pub mod api;
pub mod app_dirs;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod tui;

pub use api::{ApiClient, HealthStatus, LoginResponse, RegisterResponse, Task};
pub use config::ClientConfig;
pub use controller::{App, TaskStats};
pub use error::{ApiError, ConfigError, Result, SessionError};
pub use session::SessionStore;
