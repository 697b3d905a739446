//! # auth Routes Module
//!
//! Routes for the `/api/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs`: POST handlers (register, login, token refresh, logout, password reset)
//! - `get.rs`: GET handlers (current user info)
//! - `common.rs`: request and response bodies
//!
//! `GET /auth/me` and `POST /auth/logout` require a valid access token; the rest are public.

pub mod common;
pub mod get;
pub mod post;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::get_me;
use post::{login, logout, refresh, register, request_password_reset, reset_password};

/// Builds the `/auth` route group, mapping HTTP methods to handlers.
///
/// - `POST /auth/register` → `register`
/// - `POST /auth/login` → `login`
/// - `POST /auth/refresh` → `refresh`
/// - `POST /auth/request-password-reset` → `request_password_reset`
/// - `POST /auth/reset-password` → `reset_password`
/// - `POST /auth/logout` → `logout` (authenticated)
/// - `GET /auth/me` → `get_me` (authenticated)
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    let session = Router::new()
        .route("/me", get(get_me))
        .route("/logout", post(logout))
        .route_layer(from_fn_with_state(app_state, allow_authenticated));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/request-password-reset", post(request_password_reset))
        .route("/reset-password", post(reset_password))
        .merge(session)
}
