//! # Users Routes Module
//!
//! Routes for the `/api/users` endpoint group. Every route requires authentication.
//!
//! ## Structure
//! - `get.rs`: GET handlers (list users, get user)
//! - `put.rs`: PUT handlers (update own profile)

use axum::{
    Router,
    routing::{get, put},
};
use get::{get_user, list_users};
use put::update_me;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod put;

/// Builds the `/users` route group.
///
/// - `GET /users` → `list_users`
/// - `PUT /users/me` → `update_me`
/// - `GET /users/{user_id}` → `get_user`
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/me", put(update_me))
        .route("/{user_id}", get(get_user))
}
