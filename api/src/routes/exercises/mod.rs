//! # exercises Routes Module
//!
//! Shared exercise catalog. Anyone signed in can read it; trainers and admins write to it,
//! and only the creator (or an admin) may change or remove an entry.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get};
use util::state::AppState;

use delete::delete_exercise;
use get::{get_exercise, list_exercises};
use post::create_exercise;
use put::update_exercise;

/// - `GET /exercises` → `list_exercises`
/// - `POST /exercises` → `create_exercise`
/// - `GET /exercises/{exercise_id}` → `get_exercise`
/// - `PUT /exercises/{exercise_id}` → `update_exercise`
/// - `DELETE /exercises/{exercise_id}` → `delete_exercise`
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route(
            "/{exercise_id}",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
}
