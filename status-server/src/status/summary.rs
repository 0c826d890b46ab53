//! Conversion from TfL line DTOs to display summaries.
//!
//! Merges the texts attached to a line (status reasons, nested
//! disruptions, top-level disruption events) into one deduplicated
//! message list, and folds the status severities into a single
//! aggregate [`ServiceStatus`].

use serde::Serialize;

use crate::tfl::{Disruption, Line, LineStatus};

use super::message::{StandardizedMessage, dedup_messages};
use super::severity::{SEVERITY_GOOD_SERVICE, ServiceStatus, is_good_severity};

/// Compact per-line summary for the display board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusSummary {
    /// Aggregate status across all status entries.
    pub status: ServiceStatus,

    /// Severity description of the first status entry, present only
    /// when the aggregate status is not good.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Deduplicated disruption messages, status-derived first.
    pub messages: Vec<StandardizedMessage>,
}

impl LineStatusSummary {
    /// The all-clear summary: good service, nothing to report.
    pub fn good() -> Self {
        Self::degraded(ServiceStatus::Good)
    }

    /// Failure-path summary: a remembered status with no messages.
    pub fn degraded(status: ServiceStatus) -> Self {
        Self {
            status,
            status_description: None,
            messages: Vec::new(),
        }
    }
}

/// Summarize a single line entry.
pub fn summarize_line(line: &Line) -> LineStatusSummary {
    let statuses = &line.line_statuses;

    let mut messages: Vec<StandardizedMessage> =
        statuses.iter().filter_map(message_from_status).collect();
    messages.extend(line.disruptions.iter().filter_map(message_from_disruption));
    let messages = dedup_messages(messages);

    let status = ServiceStatus::from_severity(worst_severity(statuses));

    let status_description = if status == ServiceStatus::Good {
        None
    } else {
        statuses
            .first()
            .map(|s| s.status_severity_description.clone())
    };

    LineStatusSummary {
        status,
        status_description,
        messages,
    }
}

/// Fold status severities into the "worst" one.
///
/// Good severities are skipped; among the rest the numerically smallest
/// value wins, except that the first disrupted entry always replaces the
/// initial 10 even when numerically larger. This mirrors the TfL scheme
/// as consumed by the display board; keep the tie-break exactly.
fn worst_severity(statuses: &[LineStatus]) -> i64 {
    let mut worst = SEVERITY_GOOD_SERVICE;
    for status in statuses {
        if is_good_severity(status.status_severity) {
            continue;
        }
        if status.status_severity < worst || worst == SEVERITY_GOOD_SERVICE {
            worst = status.status_severity;
        }
    }
    worst
}

/// Build a message from a status entry, if it carries any text.
///
/// The reason takes precedence; a nested disruption supplies the text
/// otherwise, and the category fields either way.
fn message_from_status(status: &LineStatus) -> Option<StandardizedMessage> {
    let reason = status.reason.as_deref().filter(|t| !t.is_empty());
    let nested = status.disruption.as_ref();
    let nested_text = nested
        .map(|d| d.description.as_str())
        .filter(|t| !t.is_empty());

    let text = reason.or(nested_text)?;

    Some(StandardizedMessage {
        text: text.to_string(),
        severity: status.status_severity,
        severity_description: status.status_severity_description.clone(),
        category: nested.map(|d| d.category.clone()).unwrap_or_default(),
        category_description: nested
            .map(|d| d.category_description.clone())
            .unwrap_or_default(),
    })
}

/// Build a message from a top-level disruption event, if it has text.
///
/// These carry no severity of their own.
fn message_from_disruption(disruption: &Disruption) -> Option<StandardizedMessage> {
    if disruption.description.is_empty() {
        return None;
    }

    Some(StandardizedMessage {
        text: disruption.description.clone(),
        severity: 0,
        severity_description: String::new(),
        category: disruption.category.clone(),
        category_description: disruption.category_description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(severity: i64, description: &str) -> LineStatus {
        LineStatus {
            status_severity: severity,
            status_severity_description: description.to_string(),
            reason: None,
            disruption: None,
        }
    }

    fn line(statuses: Vec<LineStatus>, disruptions: Vec<Disruption>) -> Line {
        Line {
            id: "victoria".to_string(),
            name: "Victoria".to_string(),
            mode_name: Some("tube".to_string()),
            line_statuses: statuses,
            disruptions,
        }
    }

    fn disruption(category: &str, description: &str) -> Disruption {
        Disruption {
            category: category.to_string(),
            category_description: category.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn good_service_line() {
        let summary = summarize_line(&line(vec![status(10, "Good Service")], vec![]));

        assert_eq!(summary.status, ServiceStatus::Good);
        assert!(summary.status_description.is_none());
        assert!(summary.messages.is_empty());
    }

    #[test]
    fn no_statuses_defaults_to_good() {
        let summary = summarize_line(&line(vec![], vec![]));

        assert_eq!(summary.status, ServiceStatus::Good);
        assert!(summary.status_description.is_none());
    }

    #[test]
    fn smallest_non_good_severity_wins() {
        // 10 and 18 are good and ignored; 3 beats 9.
        let statuses = vec![
            status(10, "Good Service"),
            status(9, "Minor Delays"),
            status(18, "No Issues"),
            status(3, "Part Suspended"),
        ];

        let summary = summarize_line(&line(statuses, vec![]));

        assert_eq!(summary.status, ServiceStatus::Severe);
    }

    #[test]
    fn lone_high_severity_replaces_initial_good() {
        // 20 is not smaller than the initial 10, but a disrupted entry
        // must never be masked by the good default.
        let summary = summarize_line(&line(vec![status(20, "Service Closed")], vec![]));

        assert_eq!(summary.status, ServiceStatus::Severe);
    }

    #[test]
    fn later_smaller_severity_lowers_the_fold() {
        // After 20 replaces the initial 10, 15 is smaller and wins.
        let statuses = vec![status(20, "Service Closed"), status(15, "Change of Frequency")];

        let summary = summarize_line(&line(statuses, vec![]));

        assert_eq!(summary.status, ServiceStatus::Warning);
    }

    #[test]
    fn description_comes_from_first_entry_not_worst() {
        let statuses = vec![status(9, "Minor Delays"), status(3, "Part Suspended")];

        let summary = summarize_line(&line(statuses, vec![]));

        assert_eq!(summary.status, ServiceStatus::Severe);
        assert_eq!(summary.status_description.as_deref(), Some("Minor Delays"));
    }

    #[test]
    fn description_absent_when_good() {
        let summary = summarize_line(&line(vec![status(10, "Good Service")], vec![]));
        assert!(summary.status_description.is_none());
    }

    #[test]
    fn merges_status_reasons_and_disruption_events_in_order() {
        let mut delayed = status(9, "Minor Delays");
        delayed.reason = Some("Delays".to_string());

        let summary = summarize_line(&line(
            vec![delayed],
            vec![disruption("PlannedWork", "Signal failure")],
        ));

        let texts: Vec<&str> = summary.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["Delays", "Signal failure"]);

        // Status-derived message carries the entry's severity
        assert_eq!(summary.messages[0].severity, 9);
        assert_eq!(summary.messages[0].severity_description, "Minor Delays");
        assert_eq!(summary.messages[0].category, "");

        // Disruption-derived message carries no severity
        assert_eq!(summary.messages[1].severity, 0);
        assert_eq!(summary.messages[1].severity_description, "");
        assert_eq!(summary.messages[1].category, "PlannedWork");
    }

    #[test]
    fn reason_takes_precedence_over_nested_description() {
        let mut entry = status(6, "Severe Delays");
        entry.reason = Some("Severe delays due to signal failure".to_string());
        entry.disruption = Some(disruption("RealTime", "Some other text"));

        let summary = summarize_line(&line(vec![entry], vec![]));

        assert_eq!(summary.messages.len(), 2);
        assert_eq!(summary.messages[0].text, "Severe delays due to signal failure");
        // Category still comes from the nested disruption
        assert_eq!(summary.messages[0].category, "RealTime");
    }

    #[test]
    fn nested_description_used_when_reason_empty() {
        let mut entry = status(6, "Severe Delays");
        entry.reason = Some(String::new());
        entry.disruption = Some(disruption("RealTime", "Signal failure at Brixton"));

        let summary = summarize_line(&line(vec![entry], vec![]));

        assert_eq!(summary.messages.len(), 1);
        assert_eq!(summary.messages[0].text, "Signal failure at Brixton");
        assert_eq!(summary.messages[0].severity, 6);
    }

    #[test]
    fn textless_entries_produce_no_messages() {
        let mut entry = status(6, "Severe Delays");
        entry.disruption = Some(disruption("RealTime", ""));

        let summary = summarize_line(&line(
            vec![entry],
            vec![disruption("PlannedWork", "")],
        ));

        assert!(summary.messages.is_empty());
        // But the status still reflects the severity
        assert_eq!(summary.status, ServiceStatus::Severe);
    }

    #[test]
    fn identical_texts_deduplicate_across_sources() {
        let mut entry = status(6, "Severe Delays");
        entry.reason = Some("Signal failure at Brixton".to_string());

        let summary = summarize_line(&line(
            vec![entry],
            vec![disruption("RealTime", "Signal failure at Brixton")],
        ));

        assert_eq!(summary.messages.len(), 1);
        // The status-derived message came first and wins
        assert_eq!(summary.messages[0].severity, 6);
    }

    #[test]
    fn summary_serialization_omits_absent_description() {
        let good = serde_json::to_value(LineStatusSummary::good()).unwrap();
        assert_eq!(good["status"], "good");
        assert!(good.get("statusDescription").is_none());

        let disrupted = summarize_line(&line(vec![status(6, "Severe Delays")], vec![]));
        let json = serde_json::to_value(&disrupted).unwrap();
        assert_eq!(json["status"], "severe");
        assert_eq!(json["statusDescription"], "Severe Delays");
    }
}
