//! TfL Unified API HTTP client.
//!
//! Performs exactly one GET per call against a caller-supplied URL.
//! There is no retry, backoff, or caching here: a failed attempt
//! terminates the operation and the error is reported to the caller.

use serde::de::DeserializeOwned;

use super::error::TflError;
use super::types::Line;

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Build the status URL for a line id (e.g., "victoria").
pub fn line_status_url(line_id: &str) -> String {
    format!("{DEFAULT_BASE_URL}/Line/{line_id}/Status")
}

/// Build the arrivals URL for a StopPoint id (e.g., "940GZZLUVIC").
pub fn arrivals_url(stop_point_id: &str) -> String {
    format!("{DEFAULT_BASE_URL}/StopPoint/{stop_point_id}/Arrivals")
}

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflClientConfig {
    /// Optional application key. Anonymous access works but is
    /// rate-limited more aggressively.
    pub app_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflClientConfig {
    /// Create a config with anonymous access.
    pub fn new() -> Self {
        Self {
            app_key: None,
            timeout_secs: 30,
        }
    }

    /// Set the application key.
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TfL Unified API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    app_key: Option<String>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflClientConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            app_key: config.app_key,
        })
    }

    /// Fetch line statuses from a status URL.
    ///
    /// Returns the full array of line entries; callers interested in a
    /// single line take the first element.
    pub async fn get_line_status(&self, url: &str) -> Result<Vec<Line>, TflError> {
        self.get_json(url).await
    }

    /// Fetch arrival predictions from an arrivals URL.
    ///
    /// The records are returned exactly as the API sent them, with no
    /// field selection or reshaping.
    pub async fn get_arrivals(&self, url: &str) -> Result<Vec<serde_json::Value>, TflError> {
        self.get_json(url).await
    }

    /// Perform one GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TflError> {
        let mut request = self.http.get(url);

        // TfL authenticates via an app_key query parameter
        if let Some(key) = &self.app_key {
            request = request.query(&[("app_key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
