//! London transit status server.
//!
//! Fetches live line status and arrival predictions from the TfL
//! Unified API and reshapes them into compact summaries for a
//! status display board.

pub mod fetcher;
pub mod status;
pub mod tfl;
pub mod web;
