//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected by the guard its audience needs.
//!
//! Route groups include:
//! - `/health` → Liveness probe (public)
//! - `/auth` → Registration, login, token refresh and password reset (public), `me` and `logout` (authenticated)
//! - `/users` → User directory and own profile (authenticated)
//! - `/schedulings` → Session booking and lifecycle (participants)
//! - `/exercises`, `/workouts`, `/plans` → Catalog (read: authenticated, write: trainer or admin)
//! - `/plans/{plan_id}/subscribe`, `/subscriptions` → Student subscriptions
//! - `/analytics` → Counters over the caller's sessions (authenticated)

use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

use crate::auth::guards::{allow_authenticated, allow_student, allow_trainer_writes};
use crate::routes::{
    analytics::analytics_routes, auth::auth_routes, exercises::exercise_routes,
    health::health_routes, plans::plan_routes, schedulings::scheduling_routes,
    subscriptions::subscription_routes, users::users_routes, workouts::workout_routes,
};

pub mod analytics;
pub mod auth;
pub mod common;
pub mod exercises;
pub mod health;
pub mod plans;
pub mod schedulings;
pub mod subscriptions;
pub mod users;
pub mod workouts;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts every route
/// group under its base path. Guards are attached per group with `route_layer`,
/// so unknown paths still answer `404` instead of `401`.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .nest(
            "/users",
            users_routes().route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .nest(
            "/schedulings",
            scheduling_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .nest(
            "/analytics",
            analytics_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .nest(
            "/exercises",
            exercise_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_trainer_writes)),
        )
        .nest(
            "/workouts",
            workout_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_trainer_writes)),
        )
        .nest("/plans", plan_routes(app_state.clone()))
        .nest(
            "/subscriptions",
            subscription_routes().route_layer(from_fn_with_state(app_state, allow_student)),
        )
}
