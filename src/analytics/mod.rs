//! Analytics side-channel
//!
//! Events go to an injected [`EventSink`]. Tracking never affects control
//! flow: sinks swallow their own failures and return nothing.

mod ga4;

pub use ga4::MeasurementProtocolSink;

use crate::api::{ContactFormData, RoiCalculationData};
use crate::config::{RunMode, Settings};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Parameters attached to an event
pub type EventParams = Map<String, Value>;

/// Assumed deal value reported with each generated lead, in USD
pub const LEAD_VALUE_USD: u64 = 50_000;

/// One-way consumer of analytics events
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    fn emit(&self, name: &str, params: &EventParams);
}

/// Sink used when analytics is unavailable
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _name: &str, _params: &EventParams) {}
}

/// Sink that only writes events to the log
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, name: &str, params: &EventParams) {
        let params = Value::Object(params.clone());
        tracing::debug!(event = name, params = %params, "Analytics event");
    }
}

/// Whether events should leave the machine
pub fn is_enabled(measurement_id: Option<&str>, mode: RunMode) -> bool {
    measurement_id.is_some_and(|id| !id.is_empty()) && mode == RunMode::Production
}

/// Named tracking helpers over a sink
#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn EventSink>,
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(Arc::new(NoopSink))
    }
}

impl Analytics {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Pick a sink for the resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        let enabled = is_enabled(settings.ga_measurement_id.as_deref(), settings.mode);
        match (&settings.ga_measurement_id, &settings.ga_api_secret) {
            (Some(id), Some(secret)) if enabled => {
                tracing::info!(measurement_id = %id, "Analytics enabled");
                Self::new(Arc::new(MeasurementProtocolSink::new(id, secret)))
            }
            _ if settings.mode == RunMode::Development => Self::new(Arc::new(TracingSink)),
            _ => Self::default(),
        }
    }

    /// Track a page view
    pub fn pageview(&self, url: &str) {
        let mut params = EventParams::new();
        params.insert("page_location".to_string(), json!(url));
        self.sink.emit("page_view", &params);
    }

    /// Track a custom event
    pub fn event(&self, action: &str, category: &str, label: Option<&str>, value: Option<i64>) {
        let mut params = EventParams::new();
        params.insert("event_category".to_string(), json!(category));
        if let Some(label) = label {
            params.insert("event_label".to_string(), json!(label));
        }
        if let Some(value) = value {
            params.insert("value".to_string(), json!(value));
        }
        self.sink.emit(action, &params);
    }

    /// Contact form conversion plus the lead-generation event
    pub fn track_contact_form_submission(&self, data: &ContactFormData) {
        self.event(
            "form_submit",
            "Contact",
            Some("contact_form_submission"),
            Some(1),
        );

        let mut params = EventParams::new();
        params.insert("currency".to_string(), json!("USD"));
        params.insert("value".to_string(), json!(LEAD_VALUE_USD));
        params.insert("project_type".to_string(), json!(data.project_type));
        params.insert("company".to_string(), json!(data.company));
        self.sink.emit("generate_lead", &params);
    }

    /// ROI calculator completion plus the promotion view carrying the inputs
    pub fn track_roi_calculation(&self, data: &RoiCalculationData, estimated_roi: &str) {
        self.event(
            "roi_calculation",
            "Engagement",
            Some("roi_calculator_completion"),
            Some(1),
        );

        let mut params = EventParams::new();
        params.insert("promotion_id".to_string(), json!("roi_calculator"));
        params.insert("promotion_name".to_string(), json!("ROI Calculator"));
        params.insert("company_size".to_string(), json!(data.company_size));
        params.insert("industry".to_string(), json!(data.industry));
        params.insert("estimated_roi".to_string(), json!(estimated_roi));
        self.sink.emit("view_promotion", &params);
    }

    #[allow(dead_code)]
    pub fn track_service_page_view(&self, service_name: &str) {
        self.event("page_view", "Services", Some(service_name), None);
    }

    pub fn track_cta_click(&self, location: &str, text: &str) {
        let label = format!("{location}: {text}");
        self.event("cta_click", "Engagement", Some(&label), None);
    }

    #[allow(dead_code)]
    pub fn track_case_study_view(&self, case_study_id: &str) {
        self.event("case_study_view", "Content", Some(case_study_id), None);
    }
}

/// Sink that records events in order, for assertions
#[cfg(test)]
pub mod testing {
    use super::{EventParams, EventSink};
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<(String, Value)> {
            self.events.lock().unwrap().clone()
        }

        pub fn names(&self) -> Vec<String> {
            self.events().into_iter().map(|(name, _)| name).collect()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, name: &str, params: &EventParams) {
            self.events
                .lock()
                .unwrap()
                .push((name.to_string(), Value::Object(params.clone())));
        }
    }
}
