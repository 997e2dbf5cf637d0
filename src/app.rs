//! Application state and core logic

use crate::analytics::Analytics;
use crate::api::{select_backend, ApiClient, HealthStatus, LeadBackend};
use crate::config::{RunMode, Settings};
use crate::orchestrator::{Notice, Orchestrator, SettledSubmission};
use crate::state::{AppState, Control, FieldKind, FormKind, HomeItem, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    orchestrator: Orchestrator,
    analytics: Analytics,
    /// Spawned submissions report back through this channel
    settled_tx: UnboundedSender<SettledSubmission>,
    settled_rx: UnboundedReceiver<SettledSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from resolved settings
    pub async fn new(settings: &Settings) -> Result<Self> {
        let client = ApiClient::new(settings.api_base_url.clone());
        let backend = select_backend(settings.mode, client);
        let analytics = Analytics::from_settings(settings);

        let mut app = Self::with_parts(backend, analytics, settings.mode);
        app.check_health().await;
        app.analytics.pageview(app.state.current_view.path());
        Ok(app)
    }

    /// Assemble an app around an existing backend and analytics sink
    pub fn with_parts(backend: Arc<dyn LeadBackend>, analytics: Analytics, mode: RunMode) -> Self {
        let (settled_tx, settled_rx) = unbounded_channel();
        let mut state = AppState::default();
        state.mode = mode;
        state.backend_label = backend.label();

        Self {
            state,
            orchestrator: Orchestrator::new(backend, analytics.clone()),
            analytics,
            settled_tx,
            settled_rx,
            quit: false,
        }
    }

    /// Refresh the backend health indicator
    pub async fn check_health(&mut self) {
        let healthy = match self.orchestrator.backend().health_check().await {
            Ok(body) => serde_json::from_value::<HealthStatus>(body).is_ok_and(|h| h.is_healthy()),
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                false
            }
        };
        self.state.backend_healthy = Some(healthy);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Switch views and report the page view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view != view {
            self.state.current_view = view;
            self.analytics.pageview(view.path());
        }
    }

    /// Apply every submission that has settled since the last tick
    pub fn poll_submissions(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            let form = self.state.form_mut(settled.payload.kind());
            let notice = self
                .orchestrator
                .settle(form, &settled.payload, settled.result);
            match notice {
                Notice::Success(message) => self.state.status_message = Some(message),
                Notice::Error(message) => self.push_error(message),
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view.form_kind() {
            None => self.handle_home_key(key),
            Some(kind) if self.state.form(kind).is_results_step() => {
                self.handle_results_key(kind, key)
            }
            Some(kind) => self.handle_form_key(kind, key),
        }
    }

    /// Handle keys in the home menu
    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Enter => self.open_home_item(self.state.selected_home_item()),
            _ => {}
        }
        Ok(())
    }

    fn open_home_item(&mut self, item: HomeItem) {
        match item {
            HomeItem::Contact => {
                self.analytics.track_cta_click("home", item.label());
                self.navigate(View::Contact);
            }
            HomeItem::RoiCalculator => {
                self.analytics.track_cta_click("home", item.label());
                self.navigate(View::RoiCalculator);
            }
            HomeItem::Quit => self.quit = true,
        }
    }

    /// Handle keys on an input step of a wizard
    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Char('s') if ctrl => self.activate_control(kind, Control::Submit),
            KeyCode::Char('n') if ctrl => self.activate_control(kind, Control::Next),
            KeyCode::Char('p') if ctrl => self.activate_control(kind, Control::Previous),
            KeyCode::Tab => self.state.form_mut(kind).next_field(),
            KeyCode::BackTab => self.state.form_mut(kind).prev_field(),
            _ if self.state.form(kind).is_controls_active() => self.handle_controls_key(kind, key),
            _ => self.handle_field_key(kind, key),
        }
        Ok(())
    }

    /// Editing keys for the focused field
    fn handle_field_key(&mut self, kind: FormKind, key: KeyEvent) {
        let form = self.state.form_mut(kind);
        let Some(field) = form.active_field() else {
            return;
        };

        match (field.kind, key.code) {
            (FieldKind::MultiSelect(_), KeyCode::Down) => form.move_option_cursor(true),
            (FieldKind::MultiSelect(_), KeyCode::Up) => form.move_option_cursor(false),
            (FieldKind::MultiSelect(_), KeyCode::Char(' ') | KeyCode::Enter) => {
                form.toggle_option_at_cursor()
            }
            (FieldKind::Select(_), KeyCode::Right | KeyCode::Char(' ')) => form.cycle_option(true),
            (FieldKind::Select(_), KeyCode::Left) => form.cycle_option(false),
            (FieldKind::Multiline, KeyCode::Enter) => form.input_char('\n'),
            (FieldKind::Text | FieldKind::Multiline, KeyCode::Char(c)) => form.input_char(c),
            (FieldKind::Text | FieldKind::Multiline, KeyCode::Backspace) => form.backspace(),
            (_, KeyCode::Enter | KeyCode::Down) => form.next_field(),
            (_, KeyCode::Up) => form.prev_field(),
            _ => {}
        }
    }

    /// Keys while the controls row is focused
    fn handle_controls_key(&mut self, kind: FormKind, key: KeyEvent) {
        let form = self.state.form_mut(kind);
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.prev_control(),
            KeyCode::Right | KeyCode::Char('l') => form.next_control(),
            KeyCode::Up => form.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(control) = form.selected_control() {
                    self.activate_control(kind, control);
                }
            }
            _ => {}
        }
    }

    /// Handle keys on the ROI results step
    fn handle_results_key(&mut self, kind: FormKind, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Char('r') => self.activate_control(kind, Control::CalculateAgain),
            KeyCode::Char('c') => self.activate_control(kind, Control::ScheduleConsultation),
            KeyCode::Char('y') => self.copy_results(kind),
            KeyCode::Left | KeyCode::Char('h') => self.state.form_mut(kind).prev_control(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form_mut(kind).next_control(),
            KeyCode::Enter => {
                if let Some(control) = self.state.form(kind).selected_control() {
                    self.activate_control(kind, control);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run a control if it is offered and enabled; disabled controls do nothing
    fn activate_control(&mut self, kind: FormKind, control: Control) {
        let form = self.state.form_mut(kind);
        if !form.controls().contains(&control) || !form.is_control_enabled(control) {
            return;
        }

        match control {
            Control::Previous => {
                form.prev_step();
            }
            Control::Next => {
                form.next_step();
            }
            Control::Submit => {
                if !self.orchestrator.spawn(form, self.settled_tx.clone()) {
                    tracing::debug!(form = ?kind, "Submit ignored");
                }
            }
            Control::CalculateAgain => form.reset(),
            Control::ScheduleConsultation => {
                self.analytics
                    .track_cta_click("roi_results", control.label(form.schema(), false));
                self.navigate(View::Contact);
            }
        }
    }

    fn copy_results(&mut self, kind: FormKind) {
        let Some(summary) = self.state.form(kind).results().map(|r| r.summary()) else {
            return;
        };
        match self.copy_to_clipboard(&summary) {
            Ok(()) => self.state.status_message = Some("Copied results to clipboard".to_string()),
            Err(e) => self.push_error(format!("Failed to copy: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
