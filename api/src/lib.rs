pub mod auth;
pub mod mail;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn_with_state};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::auth::middleware::log_request;
use crate::routes::routes;

/// The full HTTP application: every route group under `/api`, request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn_with_state(app_state.clone(), log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}
