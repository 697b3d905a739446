//! # plans Routes Module
//!
//! Training plans sold by trainers. The catalog is readable by everyone signed in and
//! writable by trainers and admins; subscribing is for students only.

pub mod common;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::{allow_student, allow_trainer_writes};
use get::{get_plan, list_plans};
use post::{create_plan, subscribe};
use put::update_plan;

/// - `GET /plans` → `list_plans`
/// - `POST /plans` → `create_plan` (trainer or admin)
/// - `GET /plans/{plan_id}` → `get_plan`
/// - `PUT /plans/{plan_id}` → `update_plan` (owner or admin)
/// - `POST /plans/{plan_id}/subscribe` → `subscribe` (student)
pub fn plan_routes(app_state: AppState) -> Router<AppState> {
    let catalog = Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/{plan_id}", get(get_plan).put(update_plan))
        .route_layer(from_fn_with_state(app_state.clone(), allow_trainer_writes));

    let subscriptions = Router::new()
        .route("/{plan_id}/subscribe", post(subscribe))
        .route_layer(from_fn_with_state(app_state, allow_student));

    catalog.merge(subscriptions)
}
