//! Error types for the lead API

use reqwest::StatusCode;
use serde_json::Value;

/// Message used when a transport failure carries no text of its own
pub const NETWORK_ERROR: &str = "Network error";

/// Normalized failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request failed before a JSON body could be read
    #[error("{}", network_message(.0))]
    Network(String),

    /// The task running the call ended without producing a result
    #[error("submission aborted")]
    Aborted,
}

impl ApiError {
    /// Build a server error from a non-success response body.
    ///
    /// The message is taken from `detail`, then `message`, then synthesized
    /// from the status code.
    pub fn from_response(status: StatusCode, body: &Value) -> Self {
        let message = extract_message(body, "detail")
            .or_else(|| extract_message(body, "message"))
            .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Build a transport error, keeping the raw message (possibly empty)
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    /// The message the failure carries, if it carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message.as_str()),
            ApiError::Network(message) if !message.is_empty() => Some(message.as_str()),
            ApiError::Network(_) | ApiError::Aborted => None,
        }
    }

    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::network(err.to_string())
    }
}

fn network_message(message: &str) -> &str {
    if message.is_empty() {
        NETWORK_ERROR
    } else {
        message
    }
}

/// Pull a usable message out of `body[key]`. Falsy values (null, false, 0, "") don't count.
fn extract_message(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // FastAPI validation errors put a list under `detail`
        other => Some(other.to_string()),
    }
}

/// Result of a single API call
pub type ApiResult<T> = Result<T, ApiError>;
