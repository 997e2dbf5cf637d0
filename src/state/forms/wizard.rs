//! Generic multi-step form machine

use super::field::{FieldKind, FieldSpec, FieldValue};
use super::form_state::FormState;
use super::schema::{FormKind, FormSchema};
use super::submission::Submission;
use crate::api::RoiProjection;

/// Buttons on the controls row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Submit,
    CalculateAgain,
    ScheduleConsultation,
}

impl Control {
    pub fn label(&self, schema: &FormSchema, busy: bool) -> &'static str {
        match self {
            Control::Previous => "Previous",
            Control::Next => "Next Step",
            Control::Submit if busy => schema.busy_label,
            Control::Submit => schema.submit_label,
            Control::CalculateAgain => "Calculate Again",
            Control::ScheduleConsultation => "Schedule Consultation",
        }
    }
}

/// One instance of a multi-step form: values, step, focus, and submission
#[derive(Debug, Clone)]
pub struct MultiStepForm {
    schema: &'static FormSchema,
    values: FormState,
    /// 1-based
    step: usize,
    /// Index into the current step's fields; one past the end is the controls row
    active_field: usize,
    /// Highlighted option of the focused multi-select
    option_cursor: usize,
    selected_control: usize,
    pub submission: Submission,
    results: Option<RoiProjection>,
}

impl MultiStepForm {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: schema.empty_state(),
            step: 1,
            active_field: 0,
            option_cursor: 0,
            selected_control: 0,
            submission: Submission::default(),
            results: None,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn kind(&self) -> FormKind {
        self.schema.kind
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn results(&self) -> Option<&RoiProjection> {
        self.results.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn is_results_step(&self) -> bool {
        self.schema.results_step() == Some(self.step)
    }

    pub fn is_last_input_step(&self) -> bool {
        self.step == self.schema.input_steps()
    }

    pub fn update(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.update(field, value);
    }

    pub fn toggle(&mut self, field: &str, value: &str) {
        self.values.toggle(field, value);
    }

    /// Back to step 1 with empty values and no results
    pub fn reset(&mut self) {
        self.values.reset();
        self.step = 1;
        self.results = None;
        self.focus_first_field();
    }

    pub fn can_advance(&self) -> bool {
        self.schema.can_advance(self.step, &self.values)
    }

    /// Move forward if the current step's gate allows it
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step += 1;
        self.focus_first_field();
        true
    }

    /// Move back one input step; never validated
    pub fn prev_step(&mut self) -> bool {
        if self.step <= 1 || self.is_results_step() {
            return false;
        }
        self.step -= 1;
        self.focus_first_field();
        true
    }

    /// Whether the submit control is enabled right now
    pub fn can_submit(&self) -> bool {
        self.is_last_input_step() && !self.is_busy() && self.schema.can_submit(&self.values)
    }

    /// Enter the results step with the returned projections
    pub fn show_results(&mut self, projection: RoiProjection) {
        if let Some(step) = self.schema.results_step() {
            self.results = Some(projection);
            self.step = step;
            self.focus_first_field();
        }
    }

    /// Fields shown on the current step
    pub fn current_fields(&self) -> &'static [FieldSpec] {
        self.schema.step(self.step).map(|s| s.fields).unwrap_or(&[])
    }

    pub fn active_field_index(&self) -> usize {
        self.active_field
    }

    pub fn active_field(&self) -> Option<&'static FieldSpec> {
        self.current_fields().get(self.active_field)
    }

    pub fn is_controls_active(&self) -> bool {
        self.active_field >= self.current_fields().len()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    fn focus_first_field(&mut self) {
        self.active_field = 0;
        self.option_cursor = 0;
        self.selected_control = self.default_control();
    }

    /// Focus the next field, wrapping through the controls row
    pub fn next_field(&mut self) {
        let count = self.current_fields().len() + 1;
        self.active_field = (self.active_field + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_field(&mut self) {
        let count = self.current_fields().len() + 1;
        self.active_field = (self.active_field + count - 1) % count;
        self.option_cursor = 0;
    }

    /// Buttons available on the current step
    pub fn controls(&self) -> Vec<Control> {
        if self.is_results_step() {
            return vec![Control::ScheduleConsultation, Control::CalculateAgain];
        }
        let mut controls = Vec::with_capacity(2);
        if self.step > 1 {
            controls.push(Control::Previous);
        }
        if self.is_last_input_step() {
            controls.push(Control::Submit);
        } else {
            controls.push(Control::Next);
        }
        controls
    }

    /// Whether a control can be activated
    pub fn is_control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => true,
            Control::Next => self.can_advance(),
            Control::Submit => self.can_submit(),
            Control::CalculateAgain | Control::ScheduleConsultation => true,
        }
    }

    fn default_control(&self) -> usize {
        // Forward action is last in the row
        self.controls().len().saturating_sub(1)
    }

    pub fn selected_control(&self) -> Option<Control> {
        self.controls().get(self.selected_control).copied()
    }

    pub fn selected_control_index(&self) -> usize {
        self.selected_control
    }

    pub fn next_control(&mut self) {
        let count = self.controls().len();
        self.selected_control = (self.selected_control + 1) % count;
    }

    pub fn prev_control(&mut self) {
        let count = self.controls().len();
        self.selected_control = (self.selected_control + count - 1) % count;
    }

    /// Type into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field().filter(|f| f.is_text()) {
            self.values.push_char(field.name, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field().filter(|f| f.is_text()) {
            self.values.pop_char(field.name);
        }
    }

    /// Step the focused single-select through its options
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let FieldKind::Select(options) = field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = self.values.text(field.name);
        let position = options.iter().position(|o| o.value == current);
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.values.update(field.name, options[next].value);
    }

    /// Move the highlight within the focused multi-select
    pub fn move_option_cursor(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let FieldKind::MultiSelect(options) = field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        self.option_cursor = if forward {
            (self.option_cursor + 1) % options.len()
        } else {
            (self.option_cursor + options.len() - 1) % options.len()
        };
    }

    /// Toggle the highlighted option of the focused multi-select
    pub fn toggle_option_at_cursor(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if let FieldKind::MultiSelect(options) = field.kind {
            if let Some(option) = options.get(self.option_cursor) {
                self.values.toggle(field.name, option.value);
            }
        }
    }
}
