//! Submission port shared by the real and development backends

use super::error::ApiResult;
use super::types::{ContactFormData, RoiCalculationData};
use async_trait::async_trait;
use serde_json::Value;

/// Where lead submissions go, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadBackend: Send + Sync {
    /// Short name shown in the status bar
    fn label(&self) -> &'static str;

    /// Submit the contact form
    async fn submit_contact(&self, data: &ContactFormData) -> ApiResult<Value>;

    /// Request ROI projections
    async fn calculate_roi(&self, data: &RoiCalculationData) -> ApiResult<Value>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> ApiResult<Value>;
}
