//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Contact | View::RoiCalculator => {
            if let Some(form) = app.state.active_form() {
                forms::draw(frame, main_area, form);
            }
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors are modal and drawn over everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormKind;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        use crate::analytics::Analytics;
        use crate::api::MockBackend;
        use crate::config::RunMode;
        use std::sync::Arc;

        App::with_parts(Arc::new(MockBackend), Analytics::default(), RunMode::Development)
    }

    #[test]
    fn test_home_lists_menu() {
        let screen = render(&app());
        assert!(screen.contains("Schedule a Consultation"));
        assert!(screen.contains("Calculate Your AI ROI"));
    }

    #[test]
    fn test_contact_form_renders_first_step() {
        let mut app = app();
        app.state.current_view = View::Contact;
        let screen = render(&app);
        assert!(screen.contains("Contact Us"));
        assert!(screen.contains("Step 1 of"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = app();
        app.state.current_view = View::for_form(FormKind::Roi);
        app.state.push_error("Failed to calculate ROI. Please try again.");
        let screen = render(&app);
        assert!(screen.contains("Failed to calculate"));
        assert!(screen.contains("to close"));
    }
}
