//! Stateful fetch boundary for the display board.
//!
//! [`StatusFetcher`] owns the TfL client and the per-session state the
//! display layer relies on: the last requested URLs and the last known
//! line status. It is the error boundary of the crate — no fetch
//! failure escapes it. Failures are logged and converted into degraded
//! payloads so downstream rendering never sees a missing response, only
//! a defaulted value inside one.

use serde_json::Value;

use crate::status::{LineStatusSummary, ServiceStatus, summarize_line};
use crate::tfl::TflClient;

/// Fetches arrivals and line statuses, remembering the last request.
#[derive(Debug, Clone)]
pub struct StatusFetcher {
    client: TflClient,
    last_arrivals_url: Option<String>,
    last_status_url: Option<String>,
    last_known_status: Option<ServiceStatus>,
}

impl StatusFetcher {
    /// Create a fetcher with no remembered state.
    pub fn new(client: TflClient) -> Self {
        Self {
            client,
            last_arrivals_url: None,
            last_status_url: None,
            last_known_status: None,
        }
    }

    /// Fetch arrival predictions from `url`.
    ///
    /// On success the upstream array is returned unmodified. Any
    /// failure (network, non-2xx, malformed body) yields `None`; the
    /// error is logged here and goes no further.
    pub async fn fetch_arrivals(&mut self, url: &str) -> Option<Vec<Value>> {
        self.last_arrivals_url = Some(url.to_string());

        match self.client.get_arrivals(url).await {
            Ok(arrivals) => Some(arrivals),
            Err(e) => {
                tracing::warn!(url, error = %e, "arrivals fetch failed");
                None
            }
        }
    }

    /// Fetch and summarize the line status from `url`.
    ///
    /// Takes the first line entry of the response; an empty response
    /// yields the all-clear summary. On failure, returns the last known
    /// status (or good) with no messages.
    pub async fn fetch_line_status(&mut self, url: &str) -> LineStatusSummary {
        self.last_status_url = Some(url.to_string());

        match self.client.get_line_status(url).await {
            Ok(lines) => {
                let summary = match lines.first() {
                    Some(line) => summarize_line(line),
                    // Defensive: the API always returns at least one
                    // entry for a known line id.
                    None => LineStatusSummary::good(),
                };
                self.last_known_status = Some(summary.status);
                summary
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "line status fetch failed");
                LineStatusSummary::degraded(
                    self.last_known_status.unwrap_or(ServiceStatus::Good),
                )
            }
        }
    }

    /// Re-fetch the line status from the last requested URL, if any.
    pub async fn refresh_line_status(&mut self) -> Option<LineStatusSummary> {
        let url = self.last_status_url.clone()?;
        Some(self.fetch_line_status(&url).await)
    }

    /// The status from the most recent successful line-status fetch.
    pub fn last_known_status(&self) -> Option<ServiceStatus> {
        self.last_known_status
    }

    /// The URL of the most recent arrivals request, if any.
    pub fn last_arrivals_url(&self) -> Option<&str> {
        self.last_arrivals_url.as_deref()
    }
}
