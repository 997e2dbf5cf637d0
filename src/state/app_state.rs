//! Application state definitions

use super::forms::{FormKind, MultiStepForm, CONTACT_FORM, ROI_FORM};
use crate::config::RunMode;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Contact,
    RoiCalculator,
}

impl View {
    /// Page path reported to analytics
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Contact => "/contact",
            View::RoiCalculator => "/roi-calculator",
        }
    }

    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            View::Home => None,
            View::Contact => Some(FormKind::Contact),
            View::RoiCalculator => Some(FormKind::Roi),
        }
    }

    pub fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::Contact => View::Contact,
            FormKind::Roi => View::RoiCalculator,
        }
    }
}

/// Entries of the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    Contact,
    RoiCalculator,
    Quit,
}

impl HomeItem {
    pub const ALL: [HomeItem; 3] = [HomeItem::Contact, HomeItem::RoiCalculator, HomeItem::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            HomeItem::Contact => "Schedule a Consultation",
            HomeItem::RoiCalculator => "Calculate Your AI ROI",
            HomeItem::Quit => "Quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HomeItem::Contact => "Tell us about your project and pick a time to talk",
            HomeItem::RoiCalculator => "Estimate savings, ROI and payback for your company",
            HomeItem::Quit => "",
        }
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub home_index: usize,

    // Forms
    pub contact: MultiStepForm,
    pub roi: MultiStepForm,

    // Backend
    pub mode: RunMode,
    pub backend_label: &'static str,
    /// Last health check result; `None` until checked
    pub backend_healthy: Option<bool>,

    // Feedback
    errors: VecDeque<String>,
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            home_index: 0,
            contact: MultiStepForm::new(&CONTACT_FORM),
            roi: MultiStepForm::new(&ROI_FORM),
            mode: RunMode::for_build(),
            backend_label: "",
            backend_healthy: None,
            errors: VecDeque::new(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn selected_home_item(&self) -> HomeItem {
        HomeItem::ALL[self.home_index.min(HomeItem::ALL.len() - 1)]
    }

    pub fn move_selection_down(&mut self) {
        if self.home_index + 1 < HomeItem::ALL.len() {
            self.home_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.home_index = self.home_index.saturating_sub(1);
    }

    pub fn form(&self, kind: FormKind) -> &MultiStepForm {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::Roi => &self.roi,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut MultiStepForm {
        match kind {
            FormKind::Contact => &mut self.contact,
            FormKind::Roi => &mut self.roi,
        }
    }

    /// Form shown by the current view
    pub fn active_form(&self) -> Option<&MultiStepForm> {
        self.current_view.form_kind().map(|kind| self.form(kind))
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
