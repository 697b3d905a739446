use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::exercise_service;
use util::state::AppState;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ApiPath;

/// DELETE /api/exercises/{exercise_id}
///
/// Also removes the exercise from every workout that lists it.
///
/// ### Responses
/// - `200 OK` → `{ "message": "Exercise deleted successfully" }`
/// - `403 Forbidden`
/// - `404 Not Found`
pub async fn delete_exercise(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(exercise_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    exercise_service::delete(state.db(), user.actor(), exercise_id).await?;
    Ok(Json(json!({ "message": "Exercise deleted successfully" })))
}
