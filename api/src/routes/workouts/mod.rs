//! # workouts Routes Module
//!
//! Workouts are ordered lists of exercises owned by a trainer. Templates are visible to
//! every signed-in user; other workouts only to their owner.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

use delete::delete_workout;
use get::{get_workout, list_workouts};
use post::create_workout;
use put::{replace_workout_exercises, update_workout};

/// - `GET /workouts` → `list_workouts`
/// - `POST /workouts` → `create_workout`
/// - `GET /workouts/{workout_id}` → `get_workout`
/// - `PUT /workouts/{workout_id}` → `update_workout`
/// - `DELETE /workouts/{workout_id}` → `delete_workout`
/// - `PUT /workouts/{workout_id}/exercises` → `replace_workout_exercises`
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/{workout_id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route("/{workout_id}/exercises", put(replace_workout_exercises))
}
