//! Layout and widget definitions for the two screens.
//!
//! ```text
//! ┌────────────────── Tasks screen ──────────────────┐
//! │ To-Do                          3 open • 2 done   │
//! ├── Add a task ────────────────────────────────────┤
//! │ buy milk_                                        │
//! ├── Your tasks (5 total) ──────────────────────────┤
//! │ › [ ] buy milk                                   │
//! │   [x] call plumber                               │
//! ├──────────────────────────────────────────────────┤
//! │ Space toggle • d delete • r refresh • q quit     │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The auth screen is a centered card with the two credential fields.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{AuthField, TasksFocus, TuiState};

/// Render the screen matching the controller's auth state.
pub(super) fn render(frame: &mut Frame, state: &mut TuiState) {
    if state.app.authed {
        render_tasks(frame, state);
    } else {
        render_auth(frame, state);
    }
}

// ── Auth screen ───────────────────────────────────────────────

fn render_auth(frame: &mut Frame, state: &TuiState) {
    let card = centered_rect(46, 12, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" punchlist ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // greeting
            Constraint::Length(1), // subtitle
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Welcome 👋",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Login or register to continue",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );

    render_input(
        frame,
        chunks[2],
        "Username",
        &state.app.username,
        state.auth_field == AuthField::Username,
    );
    let masked = "*".repeat(state.app.password.chars().count());
    render_input(
        frame,
        chunks[3],
        "Password",
        &masked,
        state.auth_field == AuthField::Password,
    );

    render_error_line(frame, chunks[4], &state.app.error);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter login • Ctrl+R register • Tab switch • Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[5],
    );
}

// ── Tasks screen ──────────────────────────────────────────────

fn render_tasks(frame: &mut Frame, state: &mut TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // header with badge
            Constraint::Length(3), // add input
            Constraint::Length(1), // error
            Constraint::Min(3),    // task list
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    render_input(
        frame,
        chunks[1],
        "Add a task",
        &state.app.title,
        state.tasks_focus == TasksFocus::Input,
    );
    render_error_line(frame, chunks[2], &state.app.error);
    render_task_list(frame, state, chunks[3]);
    render_footer(frame, state, chunks[4]);
}

fn render_header(frame: &mut Frame, state: &TuiState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "To-Do",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Private tasks • JWT auth",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(title), columns[0]);

    let badge = if state.app.loading {
        Span::styled("Syncing…", Style::default().fg(Color::Yellow))
    } else {
        let stats = state.app.stats();
        Span::styled(
            format!("{} open • {} done", stats.open, stats.done),
            Style::default().fg(Color::Green),
        )
    };
    frame.render_widget(
        Paragraph::new(badge).alignment(Alignment::Right),
        columns[1],
    );
}

fn render_task_list(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let stats = state.app.stats();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(state.tasks_focus == TasksFocus::List))
        .title(format!(" Your tasks ({} total) ", stats.total));

    if state.app.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No tasks yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Add your first task above",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .app
        .items
        .iter()
        .map(|task| {
            let (marker, style) = if task.is_done {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(task.title.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_footer(frame: &mut Frame, state: &TuiState, area: Rect) {
    let hints = match state.tasks_focus {
        TasksFocus::Input => "Enter add • Tab list • Ctrl+L logout • Ctrl+C quit",
        TasksFocus::List => "Space toggle • d delete • r refresh • Tab input • Ctrl+L logout • q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}

// ── Shared widgets ────────────────────────────────────────────

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let text = if value.is_empty() {
        Span::styled("…", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_owned())
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(focused))
            .title(format!(" {label} ")),
    );
    frame.render_widget(input, area);
}

fn render_error_line(frame: &mut Frame, area: Rect, error: &str) {
    if !error.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(error.to_owned(), Style::default().fg(Color::Red))),
            area,
        );
    }
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
