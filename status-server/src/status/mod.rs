//! Line-status classification and message deduplication.
//!
//! The core of this crate: maps TfL severity codes onto a three-level
//! display status and merges the various disruption texts attached to a
//! line into a deduplicated message list.

mod message;
mod severity;
mod summary;

pub use message::{StandardizedMessage, dedup_messages};
pub use severity::{ServiceStatus, is_good_severity};
pub use summary::{LineStatusSummary, summarize_line};
