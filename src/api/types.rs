//! Wire types for the lead API

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1/contact/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub project_type: String,
    pub timeline: String,
    pub budget: String,
    pub description: String,
    pub preferred_time: String,
    pub urgency: String,
}

/// Body of `POST /api/v1/roi/calculate/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiCalculationData {
    pub company_size: String,
    pub industry: String,
    pub current_processes: Vec<String>,
    pub pain_points: Vec<String>,
    pub budget_range: String,
    pub timeline: String,
}

/// Projections returned by the ROI endpoint, kept as display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    #[serde(deserialize_with = "display_text")]
    pub estimated_savings: String,
    #[serde(deserialize_with = "display_text")]
    pub roi_percentage: String,
    #[serde(deserialize_with = "display_text")]
    pub payback_period: String,
    #[serde(deserialize_with = "display_text")]
    pub efficiency_gain: String,
}

impl RoiProjection {
    /// Read projections out of a success payload
    pub fn from_payload(payload: &Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }

    /// Plain-text rendering used for the clipboard
    pub fn summary(&self) -> String {
        format!(
            "Estimated savings: {}\nROI: {}\nPayback period: {}\nEfficiency gain: {}",
            self.estimated_savings, self.roi_percentage, self.payback_period, self.efficiency_gain
        )
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Accept either a JSON string or a number and keep its text verbatim
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}
