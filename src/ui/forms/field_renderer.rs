//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(field: &FieldSpec) -> u16 {
    match field.kind {
        FieldKind::Text | FieldKind::Select(_) => 3,
        FieldKind::Multiline => 6,
        FieldKind::MultiSelect(options) => options.len() as u16 + 2,
    }
}

/// Draw one field with its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldSpec,
    values: &FormState,
    is_active: bool,
    option_cursor: usize,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match field.kind {
        FieldKind::Text | FieldKind::Multiline => text_lines(field, values.text(field.name), is_active),
        FieldKind::Select(_) => vec![select_line(field, values.text(field.name), is_active)],
        FieldKind::MultiSelect(options) => {
            let selected = values.list(field.name);
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let checked = selected.iter().any(|v| v == option.value);
                    let highlighted = is_active && i == option_cursor;
                    checkbox_line(option.label, checked, highlighted)
                })
                .collect()
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn text_lines(field: &FieldSpec, value: &str, is_active: bool) -> Vec<Line<'static>> {
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        );
        return if is_active {
            vec![Line::from(vec![cursor, placeholder])]
        } else {
            vec![Line::from(placeholder)]
        };
    }

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    // split('\n') keeps a trailing empty line so the cursor follows a newline
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

fn select_line(field: &FieldSpec, value: &str, is_active: bool) -> Line<'static> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            field.option_label(value).to_string(),
            Style::default().fg(Color::White),
        )
    };
    Line::from(vec![
        Span::styled("◂ ", arrow_style),
        text,
        Span::styled(" ▸", arrow_style),
    ])
}

fn checkbox_line(label: &'static str, checked: bool, highlighted: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let mut style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    if highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(format!("{mark}{label}"), style))
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
