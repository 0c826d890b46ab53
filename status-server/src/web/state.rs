//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::fetcher::StatusFetcher;

/// Shared application state.
///
/// The fetcher sits behind a mutex because it remembers the last known
/// status for the failure-path fallback; that field is the only mutable
/// state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Mutex<StatusFetcher>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(fetcher: StatusFetcher) -> Self {
        Self {
            fetcher: Arc::new(Mutex::new(fetcher)),
        }
    }
}
