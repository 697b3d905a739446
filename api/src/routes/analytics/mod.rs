//! # analytics Routes Module
//!
//! Read-only counters over the caller's own data.

pub mod get;

use axum::{Router, routing::get};
use util::state::AppState;

use get::scheduling_summary;

/// - `GET /analytics/schedulings` → `scheduling_summary`
pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/schedulings", get(scheduling_summary))
}
