use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::workout_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::{WorkoutDetailResponse, WorkoutResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ApiPath;

/// GET /api/workouts
///
/// Templates plus the caller's own workouts.
///
/// ### Responses
/// - `200 OK` → `{ "workouts": [ { "id": "…", "name": "Leg day", "is_template": true, … } ] }`
pub async fn list_workouts(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let workouts = workout_service::list(state.db(), user.actor()).await?;
    let workouts: Vec<WorkoutResponse> = workouts.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "workouts": workouts })))
}

/// GET /api/workouts/{workout_id}
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "workout": {
///     "id": "…",
///     "name": "Leg day",
///     "is_template": true,
///     "exercises": [ { "exercise_id": "…", "position": 0, "sets": 4, "reps": 8, "rest_seconds": 90 } ]
///   }
/// }
/// ```
/// - `404 Not Found` (missing, or a private workout of someone else)
pub async fn get_workout(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(workout_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let detail = workout_service::get(state.db(), user.actor(), workout_id).await?;
    Ok(Json(json!({ "workout": WorkoutDetailResponse::from(detail) })))
}
