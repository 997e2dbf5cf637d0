//! GA4 Measurement Protocol sink

use super::{EventParams, EventSink};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

const COLLECT_URL: &str = "https://www.google-analytics.com/mp/collect";

/// Sends each event to GA4 on a background task
pub struct MeasurementProtocolSink {
    http: reqwest::Client,
    endpoint: String,
    measurement_id: String,
    api_secret: String,
    /// Stable for the lifetime of the process
    client_id: Uuid,
}

impl MeasurementProtocolSink {
    pub fn new(measurement_id: &str, api_secret: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: COLLECT_URL.to_string(),
            measurement_id: measurement_id.to_string(),
            api_secret: api_secret.to_string(),
            client_id: Uuid::new_v4(),
        }
    }

    fn payload(&self, name: &str, params: &EventParams) -> Value {
        json!({
            "client_id": self.client_id.to_string(),
            "timestamp_micros": Utc::now().timestamp_micros(),
            "events": [{ "name": name, "params": params }],
        })
    }
}

impl EventSink for MeasurementProtocolSink {
    fn emit(&self, name: &str, params: &EventParams) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(event = name, "No runtime; analytics event dropped");
            return;
        };

        let request = self
            .http
            .post(&self.endpoint)
            .query(&[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.as_str()),
            ])
            .json(&self.payload(name, params));
        let event = name.to_string();

        runtime.spawn(async move {
            match request.send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::debug!(%event, status = %response.status(), "Analytics event rejected");
                }
                Ok(_) => {}
                Err(e) => tracing::debug!(%event, error = %e, "Analytics event not delivered"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_shape() {
        let sink = MeasurementProtocolSink::new("G-TEST", "secret");
        let mut params = EventParams::new();
        params.insert("event_category".to_string(), json!("Contact"));

        let payload = sink.payload("form_submit", &params);

        assert_eq!(payload["client_id"], sink.client_id.to_string());
        assert_eq!(payload["events"][0]["name"], "form_submit");
        assert_eq!(payload["events"][0]["params"]["event_category"], "Contact");
        assert!(payload["timestamp_micros"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_client_id_is_stable() {
        let sink = MeasurementProtocolSink::new("G-TEST", "secret");
        let first = sink.payload("a", &EventParams::new());
        let second = sink.payload("b", &EventParams::new());
        assert_eq!(first["client_id"], second["client_id"]);
    }

    #[test]
    fn test_emit_without_runtime_is_silent() {
        let sink = MeasurementProtocolSink::new("G-TEST", "secret");
        sink.emit("page_view", &EventParams::new());
    }

    #[tokio::test]
    async fn test_emit_to_unreachable_endpoint_never_fails() {
        let mut sink = MeasurementProtocolSink::new("G-TEST", "secret");
        sink.endpoint = "http://127.0.0.1:9/mp/collect".to_string();
        sink.emit("page_view", &EventParams::new());
    }
}
