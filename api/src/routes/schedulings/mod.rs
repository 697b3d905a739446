//! # schedulings Routes Module
//!
//! Sessions booked between a trainer and a student, and their lifecycle.
//!
//! ## Structure
//! - `get.rs`: listing, detail and history
//! - `post.rs`: booking and the lifecycle actions (confirm, start, complete, missed)
//! - `put.rs`: editing date, type, workout or status
//! - `delete.rs`: cancellation (the record is kept)
//! - `common.rs`: request and response bodies
//!
//! Only the two participants can see a scheduling; everyone else gets `404`.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use delete::cancel_scheduling;
use get::{get_history, get_scheduling, list_schedulings};
use post::{complete_scheduling, confirm_scheduling, create_scheduling, mark_missed, start_scheduling};
use put::update_scheduling;

/// Builds the `/schedulings` route group.
///
/// - `GET /schedulings` → `list_schedulings`
/// - `POST /schedulings` → `create_scheduling`
/// - `GET /schedulings/{scheduling_id}` → `get_scheduling`
/// - `PUT /schedulings/{scheduling_id}` → `update_scheduling`
/// - `DELETE /schedulings/{scheduling_id}` → `cancel_scheduling`
/// - `POST /schedulings/{scheduling_id}/confirm` → `confirm_scheduling`
/// - `POST /schedulings/{scheduling_id}/start` → `start_scheduling`
/// - `POST /schedulings/{scheduling_id}/complete` → `complete_scheduling`
/// - `POST /schedulings/{scheduling_id}/missed` → `mark_missed`
/// - `GET /schedulings/{scheduling_id}/history` → `get_history`
pub fn scheduling_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedulings).post(create_scheduling))
        .route(
            "/{scheduling_id}",
            get(get_scheduling)
                .put(update_scheduling)
                .delete(cancel_scheduling),
        )
        .route("/{scheduling_id}/confirm", post(confirm_scheduling))
        .route("/{scheduling_id}/start", post(start_scheduling))
        .route("/{scheduling_id}/complete", post(complete_scheduling))
        .route("/{scheduling_id}/missed", post(mark_missed))
        .route("/{scheduling_id}/history", get(get_history))
}
