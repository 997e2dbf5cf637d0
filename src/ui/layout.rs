//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{QUIT_HINT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Brand line with the route of the current view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let line = Line::from(vec![
        Span::styled(
            " AI Consulting ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(view.path(), Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Backend health
    let health = match app.state.backend_healthy {
        Some(true) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        Some(false) => Span::styled(" ○ ", Style::default().fg(Color::Red)),
        None => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(health);
    spans.push(Span::styled(
        format!("{} [{}]", app.state.backend_label, app.state.mode.label()),
        Style::default().fg(Color::Blue),
    ));
    spans.push(Span::raw(" | "));

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let hint_width = QUIT_HINT.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "j/k:nav  Enter:open  q:quit".to_string(),
        View::Contact | View::RoiCalculator => {
            format!("Tab:focus  {SUBMIT_SHORTCUT}:submit  Esc:home")
        }
    }
}
