//! Form rendering module
//!
//! - `field_renderer`: text, select and checkbox fields
//! - `wizard`: input steps with step indicator and controls
//! - `results`: the ROI projection cards

mod field_renderer;
mod results;
mod wizard;

use crate::state::MultiStepForm;
use ratatui::{layout::Rect, Frame};

/// Draw whichever step the form is on
pub fn draw(frame: &mut Frame, area: Rect, form: &MultiStepForm) {
    if form.is_results_step() {
        results::draw(frame, area, form);
    } else {
        wizard::draw_input_step(frame, area, form);
    }
}
