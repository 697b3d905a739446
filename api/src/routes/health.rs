use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use util::state::AppState;

/// Builds the `/health` route group.
///
/// This includes a single `GET /health` endpoint, used for uptime checks and deployment probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "ok" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
