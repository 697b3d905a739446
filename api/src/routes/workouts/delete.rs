use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::workout_service;
use util::state::AppState;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ApiPath;

/// DELETE /api/workouts/{workout_id}
///
/// Schedulings that referenced the workout keep existing with `workout_id: null`.
///
/// ### Responses
/// - `200 OK` → `{ "message": "Workout deleted successfully" }`
pub async fn delete_workout(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(workout_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    workout_service::delete(state.db(), user.actor(), workout_id).await?;
    Ok(Json(json!({ "message": "Workout deleted successfully" })))
}
