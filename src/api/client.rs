//! HTTP client for the lead API
//!
//! Every call is a single attempt: no retries, no timeout, no cancellation.
//! Responses are normalized into `ApiResult<Value>`.

use super::error::{ApiError, ApiResult};
use super::types::{ContactFormData, RoiCalculationData};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Default API address when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const CONTACT_ENDPOINT: &str = "/api/v1/contact/";
pub const ROI_ENDPOINT: &str = "/api/v1/roi/calculate/";
pub const HEALTH_ENDPOINT: &str = "/health";

/// Base URL and default headers, fixed when the client is built
#[derive(Debug, Clone)]
pub struct RequestConfig {
    base_url: String,
    default_headers: HeaderMap,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Per-call options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a JSON body
    pub fn post_json<T: Serialize>(body: &T) -> ApiResult<Self> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(body)?),
            headers: HeaderMap::new(),
        })
    }

    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Merge caller headers over the defaults; caller wins on conflict
pub fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name.clone(), value.clone());
    }
    merged
}

/// Client for the consulting firm's lead API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: RequestConfig,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(RequestConfig::new(base_url))
    }

    pub fn with_config(config: RequestConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Issue one request and normalize the outcome
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Value> {
        let url = self.config.url(endpoint);
        let headers = merge_headers(self.config.default_headers(), &options.headers);

        tracing::debug!(method = %options.method, %url, "Sending API request");

        let mut builder = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "API request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        // Body is parsed regardless of status so error details can be read
        let data: Value = response.json().await.map_err(|e| {
            tracing::warn!(%url, %status, error = %e, "Failed to parse API response");
            ApiError::from(e)
        })?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &data);
            tracing::warn!(%url, %status, error = %err, "API returned an error");
            return Err(err);
        }

        Ok(data)
    }

    /// Submit the contact form
    pub async fn submit_contact_form(&self, data: &ContactFormData) -> ApiResult<Value> {
        self.request(CONTACT_ENDPOINT, RequestOptions::post_json(data)?)
            .await
    }

    /// Request ROI projections
    pub async fn calculate_roi(&self, data: &RoiCalculationData) -> ApiResult<Value> {
        self.request(ROI_ENDPOINT, RequestOptions::post_json(data)?)
            .await
    }

    /// Check that the API is reachable
    pub async fn health_check(&self) -> ApiResult<Value> {
        let options =
            RequestOptions::get().with_header(ACCEPT, HeaderValue::from_static("application/json"));
        self.request(HEALTH_ENDPOINT, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap as AxumHeaders, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// What the test server saw on its last request
    #[derive(Default)]
    struct Seen {
        content_type: Option<String>,
        body: Option<Value>,
    }

    type Shared = Arc<Mutex<Seen>>;

    async fn record(State(seen): State<Shared>, headers: AxumHeaders, body: String) {
        let mut seen = seen.lock().unwrap();
        seen.content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.body = serde_json::from_str(&body).ok();
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn contact() -> ContactFormData {
        ContactFormData {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "Test Corp".to_string(),
            project_type: "ai-implementation".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let config = RequestConfig::new("http://localhost:8000/");
        assert_eq!(config.url(CONTACT_ENDPOINT), "http://localhost:8000/api/v1/contact/");
        assert_eq!(config.url(HEALTH_ENDPOINT), "http://localhost:8000/health");
    }

    #[test]
    fn test_default_config_points_at_local_api() {
        assert_eq!(RequestConfig::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_headers_have_json_content_type() {
        let config = RequestConfig::default();
        assert_eq!(
            config.default_headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_merge_headers_caller_wins() {
        let defaults = RequestConfig::default().default_headers().clone();
        let overrides = RequestOptions::get()
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .headers;
        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn test_merge_headers_keeps_defaults() {
        let defaults = RequestConfig::default().default_headers().clone();
        let overrides = RequestOptions::get()
            .with_header(
                reqwest::header::AUTHORIZATION,
                HeaderValue::from_static("Bearer t"),
            )
            .headers;
        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(merged.get(reqwest::header::AUTHORIZATION).unwrap(), "Bearer t");
    }

    #[test]
    fn test_post_json_sets_method_and_body() {
        let options = RequestOptions::post_json(&contact()).unwrap();
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body.unwrap()["email"], "john@example.com");
    }

    #[tokio::test]
    async fn test_submit_contact_success() {
        let seen = Shared::default();
        let router = Router::new()
            .route(
                CONTACT_ENDPOINT,
                post(|state: State<Shared>, headers: AxumHeaders, body: String| async move {
                    record(state, headers, body).await;
                    Json(json!({"message": "Success"}))
                }),
            )
            .with_state(seen.clone());
        let client = ApiClient::new(serve(router).await);

        let result = client.submit_contact_form(&contact()).await;

        assert_eq!(result, Ok(json!({"message": "Success"})));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.content_type.as_deref(), Some("application/json"));
        let body = seen.body.as_ref().unwrap();
        assert_eq!(body["projectType"], "ai-implementation");
        assert_eq!(body["name"], "John Doe");
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let router = Router::new().route(
            CONTACT_ENDPOINT,
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Validation error"})),
                )
            }),
        );
        let client = ApiClient::new(serve(router).await);

        let err = client.submit_contact_form(&contact()).await.unwrap_err();

        assert_eq!(err.to_string(), "Validation error");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_error_without_detail_synthesizes_message() {
        let router = Router::new().route(
            ROI_ENDPOINT,
            post(|| async { (StatusCode::BAD_GATEWAY, Json(json!({}))) }),
        );
        let client = ApiClient::new(serve(router).await);

        let err = client
            .calculate_roi(&RoiCalculationData::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Server error: 502");
    }

    #[tokio::test]
    async fn test_calculate_roi_success() {
        let projections = json!({
            "estimated_savings": "$2.3M annually",
            "roi_percentage": "340%",
        });
        let expected = projections.clone();
        let router = Router::new().route(
            ROI_ENDPOINT,
            post(move || {
                let projections = projections.clone();
                async move { Json(projections) }
            }),
        );
        let client = ApiClient::new(serve(router).await);

        let result = client.calculate_roi(&RoiCalculationData::default()).await;

        assert_eq!(result, Ok(expected));
    }

    #[tokio::test]
    async fn test_health_check_uses_get() {
        let router = Router::new().route(
            HEALTH_ENDPOINT,
            get(|headers: AxumHeaders| async move {
                let accept = headers
                    .get("accept")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"status": "healthy", "accept": accept}))
            }),
        );
        let client = ApiClient::new(serve(router).await);

        let result = client.health_check().await;

        assert_eq!(
            result,
            Ok(json!({"status": "healthy", "accept": "application/json"}))
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_network_failure() {
        let router = Router::new().route(HEALTH_ENDPOINT, get(|| async { "<html>oops</html>" }));
        let client = ApiClient::new(serve(router).await);

        let err = client.health_check().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.message().is_some());
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_network_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(format!("http://{addr}"));

        let err = client.health_check().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }
}
