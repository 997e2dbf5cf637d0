//! ROI results step

use super::field_renderer::draw_help_text;
use super::wizard::{draw_controls, draw_step_indicator};
use crate::state::MultiStepForm;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the projections returned by the calculator
pub fn draw(frame: &mut Frame, area: Rect, form: &MultiStepForm) {
    let Some(results) = form.results() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", form.schema().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Step indicator
            Constraint::Length(1),             // Spacer
            Constraint::Length(2),             // Heading
            Constraint::Length(4),             // Top row of cards
            Constraint::Length(4),             // Bottom row of cards
            Constraint::Length(4),             // Call to action
            Constraint::Min(0),                // Flex
            Constraint::Length(BUTTON_HEIGHT), // Controls
            Constraint::Length(1),             // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_step_indicator(frame, chunks[0], form);

    let heading = vec![
        Line::from(Span::styled(
            "Your AI ROI Projection",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Based on your company profile and industry benchmarks",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[2]);

    let cards = [
        ("Estimated Annual Savings", results.estimated_savings.as_str(), Color::Green),
        ("Return on Investment", results.roi_percentage.as_str(), Color::Blue),
        ("Payback Period", results.payback_period.as_str(), Color::Magenta),
        ("Efficiency Improvement", results.efficiency_gain.as_str(), Color::Yellow),
    ];
    for (row, pair) in cards.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3 + row]);
        for (column, (label, value, color)) in pair.iter().enumerate() {
            draw_card(frame, columns[column], label, value, *color);
        }
    }

    let pitch = Paragraph::new(vec![
        Line::from(Span::styled(
            "Ready to make this a reality?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "These projections are based on industry benchmarks and similar implementations. \
             Schedule a consultation to get a detailed implementation plan.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(pitch, chunks[5]);

    draw_controls(frame, chunks[7], form);
    draw_help_text(
        frame,
        chunks[8],
        "c:schedule consultation  r:calculate again  y:copy  Esc:home",
    );
}

fn draw_card(frame: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let content = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
