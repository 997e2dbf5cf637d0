//! Backend selection between the live API and canned development responses

use super::client::ApiClient;
use super::error::ApiResult;
use super::traits::LeadBackend;
use super::types::{ContactFormData, RoiCalculationData};
use crate::config::RunMode;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Acknowledgment returned for contact submissions in development mode
pub const DEV_CONTACT_MESSAGE: &str = "Thank you! We'll be in touch within 24 hours.";

/// Backend that talks to the real API
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeadBackend for HttpBackend {
    fn label(&self) -> &'static str {
        "api"
    }

    async fn submit_contact(&self, data: &ContactFormData) -> ApiResult<Value> {
        self.client.submit_contact_form(data).await
    }

    async fn calculate_roi(&self, data: &RoiCalculationData) -> ApiResult<Value> {
        self.client.calculate_roi(data).await
    }

    async fn health_check(&self) -> ApiResult<Value> {
        self.client.health_check().await
    }
}

/// Development backend: logs the payload and answers with fixed data
#[derive(Debug, Default)]
pub struct MockBackend;

#[async_trait]
impl LeadBackend for MockBackend {
    fn label(&self) -> &'static str {
        "dev"
    }

    async fn submit_contact(&self, data: &ContactFormData) -> ApiResult<Value> {
        tracing::info!(payload = ?data, "Contact form submitted (dev mode)");
        Ok(json!({ "message": DEV_CONTACT_MESSAGE }))
    }

    async fn calculate_roi(&self, data: &RoiCalculationData) -> ApiResult<Value> {
        tracing::info!(payload = ?data, "ROI calculation requested (dev mode)");
        Ok(json!({
            "estimated_savings": "$2.3M annually",
            "roi_percentage": "340%",
            "payback_period": "6 months",
            "efficiency_gain": "65%",
        }))
    }

    async fn health_check(&self) -> ApiResult<Value> {
        Ok(json!({ "status": "healthy" }))
    }
}

/// Pick the backend once for the lifetime of the app
pub fn select_backend(mode: RunMode, client: ApiClient) -> Arc<dyn LeadBackend> {
    match mode {
        RunMode::Development => {
            tracing::info!("Using development backend; submissions stay local");
            Arc::new(MockBackend)
        }
        RunMode::Production => {
            tracing::info!(base_url = client.config().base_url(), "Using live API backend");
            Arc::new(HttpBackend::new(client))
        }
    }
}
