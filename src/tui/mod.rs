//! Terminal front-end.
//!
//! Two screens driven entirely by [`App`] state: an auth form while logged
//! out, the task list once a session is active. Backend operations are
//! awaited inline in the key handlers, which serializes them by
//! construction; a frame with the syncing badge is painted immediately
//! before each round trip, and any input that queued up while the request
//! was in flight is discarded afterwards so stale keypresses cannot drive
//! controls that were shown disabled.

mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;

use crate::api::Task;
use crate::controller::App;

/// Which auth-screen field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthField {
    Username,
    Password,
}

impl AuthField {
    fn other(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Which tasks-screen pane receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TasksFocus {
    Input,
    List,
}

/// Terminal-side state layered over the controller.
struct TuiState {
    app: App,
    auth_field: AuthField,
    tasks_focus: TasksFocus,
    list_state: ListState,
    should_quit: bool,
}

impl TuiState {
    fn new(app: App) -> Self {
        Self {
            app,
            auth_field: AuthField::Username,
            tasks_focus: TasksFocus::Input,
            list_state: ListState::default(),
            should_quit: false,
        }
    }

    /// Keep the list selection inside the current task list.
    fn clamp_selection(&mut self) {
        let len = self.app.items.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(idx));
        }
    }

    fn select_next(&mut self) {
        let len = self.app.items.len();
        if let Some(i) = self.list_state.selected()
            && i + 1 < len
        {
            self.list_state.select(Some(i + 1));
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.app.items.get(i))
    }

    /// Put the tasks screen back in its initial shape (used on screen
    /// transitions in either direction).
    fn reset_view(&mut self) {
        self.auth_field = AuthField::Username;
        self.tasks_focus = TasksFocus::Input;
        self.list_state.select(None);
    }

    fn active_auth_draft_mut(&mut self) -> &mut String {
        match self.auth_field {
            AuthField::Username => &mut self.app.username,
            AuthField::Password => &mut self.app.password,
        }
    }
}

/// Run the terminal UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or a draw fails.
pub async fn run(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new(app);
    let result = run_app(&mut terminal, &mut state).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
) -> Result<()> {
    // A stored token means we start on the tasks screen; populate it.
    if state.app.authed {
        paint_syncing(terminal, state)?;
        state.app.refresh().await;
        drain_pending_input()?;
    }

    loop {
        state.clamp_selection();
        terminal.draw(|f| ui::render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                if state.app.authed {
                    handle_tasks_key(terminal, state, key).await?;
                } else {
                    handle_auth_key(terminal, state, key).await?;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

async fn handle_auth_key(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    key: KeyEvent,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.auth_field = state.auth_field.other();
        }
        KeyCode::Enter => {
            if state.app.can_submit_auth() {
                paint_syncing(terminal, state)?;
                state.app.login().await;
                drain_pending_input()?;
                state.reset_view();
            }
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if state.app.can_submit_auth() {
                paint_syncing(terminal, state)?;
                state.app.register().await;
                drain_pending_input()?;
                state.reset_view();
            }
        }
        KeyCode::Backspace => {
            state.active_auth_draft_mut().pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.active_auth_draft_mut().push(c);
        }
        _ => {}
    }
    Ok(())
}

async fn handle_tasks_key(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    key: KeyEvent,
) -> Result<()> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.app.logout();
            state.reset_view();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.tasks_focus = match state.tasks_focus {
                TasksFocus::Input => TasksFocus::List,
                TasksFocus::List => TasksFocus::Input,
            };
            return Ok(());
        }
        _ => {}
    }

    match state.tasks_focus {
        TasksFocus::Input => match key.code {
            KeyCode::Enter => {
                if state.app.can_add_task() {
                    paint_syncing(terminal, state)?;
                    state.app.add_task().await;
                    drain_pending_input()?;
                }
            }
            KeyCode::Backspace => {
                state.app.title.pop();
            }
            KeyCode::Esc | KeyCode::Down => state.tasks_focus = TasksFocus::List,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.app.title.push(c);
            }
            _ => {}
        },
        TasksFocus::List => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => state.should_quit = true,
            KeyCode::Up => match state.list_state.selected() {
                Some(i) if i > 0 => state.list_state.select(Some(i - 1)),
                _ => state.tasks_focus = TasksFocus::Input,
            },
            KeyCode::Down => state.select_next(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some((id, next)) = state.selected_task().map(|t| (t.id, !t.is_done)) {
                    paint_syncing(terminal, state)?;
                    state.app.toggle_task(id, next).await;
                    drain_pending_input()?;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = state.selected_task().map(|t| t.id) {
                    paint_syncing(terminal, state)?;
                    state.app.delete_task(id).await;
                    drain_pending_input()?;
                }
            }
            KeyCode::Char('r') => {
                paint_syncing(terminal, state)?;
                state.app.refresh().await;
                drain_pending_input()?;
            }
            _ => {}
        },
    }
    Ok(())
}

/// Paint one frame with the syncing badge up; the following network round
/// trip blocks the event loop, so this is the frame shown for its
/// duration.
fn paint_syncing(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
) -> io::Result<()> {
    state.app.loading = true;
    terminal.draw(|f| ui::render(f, state))?;
    Ok(())
}

/// Throw away input that queued up while a request was in flight.
fn drain_pending_input() -> io::Result<()> {
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::api::ApiClient;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;

    fn state_with_items(dir: &tempfile::TempDir, titles: &[&str]) -> TuiState {
        let config = ClientConfig {
            api_url: "http://127.0.0.1:1".to_owned(),
        };
        let api = ApiClient::new(&config, SessionStore::new(dir.path().join("token")));
        let mut state = TuiState::new(App::new(api));
        state.app.items = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Task {
                id: i as i64 + 1,
                title: (*title).to_owned(),
                is_done: false,
            })
            .collect();
        state
    }

    #[test]
    fn clamp_on_empty_list_clears_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &[]);
        state.list_state.select(Some(3));
        state.clamp_selection();
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn clamp_pulls_selection_back_into_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &["a", "b"]);
        state.list_state.select(Some(9));
        state.clamp_selection();
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn clamp_defaults_to_first_item() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &["a", "b"]);
        state.clamp_selection();
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn select_next_stops_at_last_item() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &["a", "b"]);
        state.clamp_selection();
        state.select_next();
        assert_eq!(state.list_state.selected(), Some(1));
        state.select_next();
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn selected_task_follows_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &["first", "second"]);
        state.clamp_selection();
        state.select_next();
        assert_eq!(state.selected_task().map(|t| t.title.as_str()), Some("second"));
    }

    #[test]
    fn reset_view_restores_initial_focus() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &["a"]);
        state.auth_field = AuthField::Password;
        state.tasks_focus = TasksFocus::List;
        state.clamp_selection();
        state.reset_view();
        assert_eq!(state.auth_field, AuthField::Username);
        assert_eq!(state.tasks_focus, TasksFocus::Input);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn active_auth_draft_tracks_focused_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_items(&dir, &[]);
        state.active_auth_draft_mut().push_str("alice");
        assert_eq!(state.app.username, "alice");
        state.auth_field = AuthField::Password;
        state.active_auth_draft_mut().push_str("pw1");
        assert_eq!(state.app.password, "pw1");
    }
}
