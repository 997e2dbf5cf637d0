//! Lead API: HTTP client, wire types, and the submission port

mod backend;
mod client;
mod error;
mod traits;
mod types;

pub use backend::{select_backend, MockBackend};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use traits::LeadBackend;
pub use types::{ContactFormData, HealthStatus, RoiCalculationData, RoiProjection};

#[cfg(test)]
pub use traits::MockLeadBackend;
