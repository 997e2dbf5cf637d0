//! Multi-step form rendering

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::platform::{NEXT_SHORTCUT, PREVIOUS_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Control, MultiStepForm};
use crate::ui::components::{button_width, render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw an input step of a wizard
pub fn draw_input_step(frame: &mut Frame, area: Rect, form: &MultiStepForm) {
    let schema = form.schema();
    let block = Block::default()
        .title(format!(" {} ", schema.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.current_fields();
    let mut constraints = vec![
        Constraint::Length(1), // Step indicator
        Constraint::Length(1), // Spacer
        Constraint::Length(2), // Step title + description
    ];
    constraints.extend(fields.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.extend([
        Constraint::Min(0),                // Flex
        Constraint::Length(BUTTON_HEIGHT), // Controls
        Constraint::Length(1),             // Help text
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_step_indicator(frame, chunks[0], form);

    if let Some(step) = schema.step(form.step()) {
        let header = vec![
            Line::from(Span::styled(
                format!("Step {} of {}: {}", form.step(), schema.input_steps(), step.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                step.description,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(header), chunks[2]);
    }

    for (i, field) in fields.iter().enumerate() {
        let is_active = form.active_field_index() == i;
        draw_field(
            frame,
            chunks[3 + i],
            field,
            form.values(),
            is_active,
            form.option_cursor(),
        );
    }

    let controls_area = chunks[chunks.len() - 2];
    draw_controls(frame, controls_area, form);
    draw_help_text(frame, chunks[chunks.len() - 1], &help_text(form));
}

/// Numbered step markers: done, current, upcoming
pub fn draw_step_indicator(frame: &mut Frame, area: Rect, form: &MultiStepForm) {
    let schema = form.schema();
    let mut spans = Vec::new();

    for number in 1..=schema.total_steps() {
        let title = schema.step(number).map_or("Results", |s| s.title);
        let (marker, style) = if number < form.step() {
            ("✓", Style::default().fg(Color::Green))
        } else if number == form.step() {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };

        if number > 1 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{marker} {number} {title}"), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Row of buttons for the current step
pub fn draw_controls(frame: &mut Frame, area: Rect, form: &MultiStepForm) {
    let controls = form.controls();
    let busy = form.is_busy();
    let labels: Vec<&str> = controls
        .iter()
        .map(|c| c.label(form.schema(), busy))
        .collect();

    // Forward actions sit on the right
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(labels.iter().map(|l| Constraint::Length(button_width(l))));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (control, label)) in controls.iter().zip(&labels).enumerate() {
        let is_selected = form.is_controls_active() && form.selected_control_index() == i;
        let accent = match control {
            Control::Submit | Control::ScheduleConsultation => Color::Green,
            Control::Next => Color::Blue,
            Control::Previous | Control::CalculateAgain => Color::Gray,
        };
        render_action_button(
            frame,
            chunks[i + 1],
            label,
            is_selected,
            form.is_control_enabled(*control),
            Some(accent),
        );
    }
}

fn help_text(form: &MultiStepForm) -> String {
    let back = if form.step() > 1 {
        format!("  {PREVIOUS_SHORTCUT}:previous")
    } else {
        String::new()
    };
    if form.is_busy() {
        return format!("{} Please wait{back}", form.schema().busy_label);
    }
    let forward = if form.is_last_input_step() {
        format!("{SUBMIT_SHORTCUT}:submit")
    } else {
        format!("{NEXT_SHORTCUT}:next")
    };
    format!("Tab:next field  {forward}{back}  Esc:home")
}
