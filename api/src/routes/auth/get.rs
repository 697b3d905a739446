use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::user_service;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::users::common::UserResponse;

/// GET /api/auth/me
///
/// Returns the authenticated user.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "user": { "id": "…", "name": "Ana", "email": "ana@gym.test", "role": "STUDENT", "phone": null, "created_at": "…", "updated_at": "…" } }
/// ```
/// - `401 Unauthorized` (missing or invalid token)
pub async fn get_me(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let me = user_service::get(state.db(), user.id).await?;
    Ok(Json(json!({ "user": UserResponse::from(me) })))
}
