//! Landing menu

use crate::app::App;
use crate::state::HomeItem;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MENU_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![
        Constraint::Min(0),    // Top padding
        Constraint::Length(4), // Headline
    ];
    for _ in HomeItem::ALL {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let headline = Paragraph::new(vec![
        Line::from(Span::styled(
            "Practical AI for growing businesses",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Estimate your return or talk to a consultant.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(headline, rows[1]);

    let selected = app.state.selected_home_item();
    for (i, item) in HomeItem::ALL.iter().enumerate() {
        let button_area = centered_column(rows[2 + i * 2], MENU_WIDTH);
        let accent = match item {
            HomeItem::Contact => Color::Green,
            HomeItem::RoiCalculator => Color::Blue,
            HomeItem::Quit => Color::Gray,
        };
        render_action_button(
            frame,
            button_area,
            item.label(),
            *item == selected,
            true,
            Some(accent),
        );

        let description = Paragraph::new(item.description())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(description, centered_column(rows[3 + i * 2], MENU_WIDTH * 2));
    }
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
