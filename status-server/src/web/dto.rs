//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::{ServiceStatus, StandardizedMessage};

/// Request for arrival predictions.
///
/// Either a full arrivals URL or a StopPoint id to build one from.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalsRequest {
    /// Full arrivals URL to fetch
    pub url: Option<String>,

    /// StopPoint id (e.g., "940GZZLUVIC")
    pub stop_point: Option<String>,
}

/// Response carrying raw arrival records.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse {
    /// The URL that was fetched
    pub url: String,

    /// The upstream array, verbatim, or null if the fetch failed
    pub result: Option<Vec<Value>>,
}

/// Request for a line-status summary.
///
/// Either a full status URL or a line id to build one from.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusRequest {
    /// Full status URL to fetch
    pub url: Option<String>,

    /// Line id (e.g., "victoria")
    pub line: Option<String>,
}

/// Response carrying a line-status summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusResponse {
    /// The URL that was fetched
    pub url: String,

    /// Aggregate status for the line
    pub status: ServiceStatus,

    /// Severity description of the first status entry, present only
    /// when the status is not good
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Deduplicated disruption messages
    pub messages: Vec<StandardizedMessage>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
