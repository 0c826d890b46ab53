//! TfL API response DTOs.
//!
//! These types map directly to the TfL Unified API line-status JSON.
//! Fields the API omits for healthy lines (reasons, disruptions) default
//! to empty rather than failing deserialization.
//!
//! Arrival predictions are deliberately not modelled here: the arrivals
//! contract is verbatim pass-through, so they stay as `serde_json::Value`.

use serde::Deserialize;

/// One line entry from `/Line/{id}/Status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Line identifier (e.g., "victoria").
    pub id: String,

    /// Human-readable line name (e.g., "Victoria").
    pub name: String,

    /// Transport mode (e.g., "tube", "overground").
    pub mode_name: Option<String>,

    /// Status entries for this line. Usually one, but a line can carry
    /// several simultaneous statuses (e.g., part closure plus delays).
    #[serde(default)]
    pub line_statuses: Vec<LineStatus>,

    /// Disruption events attached directly to the line.
    #[serde(default)]
    pub disruptions: Vec<Disruption>,
}

/// One entry in a line's status array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    /// Severity code, 0-20 in the TfL scheme.
    pub status_severity: i64,

    /// Human-readable severity (e.g., "Good Service", "Severe Delays").
    #[serde(default)]
    pub status_severity_description: String,

    /// Free-text reason for the disruption. Absent on healthy lines.
    pub reason: Option<String>,

    /// Nested disruption detail, when present.
    pub disruption: Option<Disruption>,
}

/// A described service-affecting event, either attached to a line or
/// nested inside a status entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Disruption category (e.g., "RealTime", "PlannedWork").
    #[serde(default)]
    pub category: String,

    /// Human-readable category.
    #[serde(default)]
    pub category_description: String,

    /// Disruption description text.
    #[serde(default)]
    pub description: String,
}
