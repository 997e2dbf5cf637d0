//! Modal shown for failed submissions and other queued errors

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const DIALOG_WIDTH: u16 = 64;

fn dismiss_hint(pending: usize) -> Vec<Span<'static>> {
    let keys = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let after = if pending > 1 { " for the next one" } else { " to close" };
    vec![
        Span::styled("Enter", keys),
        Span::raw("/"),
        Span::styled("Esc", keys),
        Span::raw(after),
    ]
}

/// Render the oldest queued error; `pending` counts the whole queue
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, pending: usize) {
    let config = DialogConfig {
        title: "Error",
        title_color: Color::Red,
        border_color: Color::Red,
        message: error_message,
        counter: (pending > 1).then(|| format!("+{} more", pending - 1)),
        hint: Some(dismiss_hint(pending)),
        max_width: DIALOG_WIDTH,
    };
    render_dialog(frame, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint_text(pending: usize) -> String {
        dismiss_hint(pending)
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_hint_mentions_queue() {
        assert_eq!(hint_text(1), "Enter/Esc to close");
        assert_eq!(hint_text(3), "Enter/Esc for the next one");
    }
}
