//! TfL Unified API integration.
//!
//! HTTP client and response DTOs for the line-status and arrivals
//! endpoints. Conversion into display summaries lives in
//! [`crate::status`].

mod client;
mod error;
mod types;

pub use client::{TflClient, TflClientConfig, arrivals_url, line_status_url};
pub use error::TflError;
pub use types::{Disruption, Line, LineStatus};
