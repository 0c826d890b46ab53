//! Standardized disruption messages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The unified shape produced by merging status entries and disruption
/// events. This is what the display board renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardizedMessage {
    /// Human-readable disruption text.
    pub text: String,

    /// Severity code of the originating status entry, or 0 for
    /// messages derived from top-level disruption events.
    pub severity: i64,

    /// Human-readable severity, empty for disruption-derived messages.
    pub severity_description: String,

    /// Disruption category (e.g., "RealTime"), empty when unknown.
    pub category: String,

    /// Human-readable category, empty when unknown.
    pub category_description: String,
}

/// Deduplicate messages by exact text, keeping the first occurrence.
///
/// A status entry and its line's disruption event frequently carry the
/// same text; the first wins. Empty-text messages are dropped outright.
pub fn dedup_messages(messages: Vec<StandardizedMessage>) -> Vec<StandardizedMessage> {
    let mut seen = HashSet::new();
    messages
        .into_iter()
        .filter(|m| !m.text.is_empty() && seen.insert(m.text.clone()))
        .collect()
}
