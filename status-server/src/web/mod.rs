//! Web layer for the status server.
//!
//! Provides the HTTP endpoints the display frontend polls.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
