//! Severity classification.
//!
//! TfL severity codes are integers 0-20. The display board only
//! distinguishes three levels, so codes collapse onto a fixed
//! three-way mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity code for "Good Service".
pub(crate) const SEVERITY_GOOD_SERVICE: i64 = 10;

/// Aggregate display status for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Good,
    Warning,
    Severe,
}

impl ServiceStatus {
    /// Classify a TfL severity code.
    ///
    /// The mapping is fixed: 10 "Good Service", 18 "No Issues" and
    /// 19 "Information" count as good; the codes for closures,
    /// suspensions and severe delays count as severe; everything else
    /// (minor delays, part closures, unknown codes) is a warning.
    pub fn from_severity(severity: i64) -> Self {
        match severity {
            10 | 18 | 19 => ServiceStatus::Good,
            1 | 2 | 3 | 6 | 16 | 20 => ServiceStatus::Severe,
            _ => ServiceStatus::Warning,
        }
    }

    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Good => "good",
            ServiceStatus::Warning => "warning",
            ServiceStatus::Severe => "severe",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a severity code represents an undisrupted service.
///
/// Good severities are ignored by the worst-severity computation.
pub fn is_good_severity(severity: i64) -> bool {
    matches!(severity, 10 | 18 | 19)
}
