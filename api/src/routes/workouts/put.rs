use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::workout_service::{self, WorkoutUpdate};
use util::state::AppState;
use uuid::Uuid;

use super::common::{ReplaceExercisesRequest, UpdateWorkoutRequest, WorkoutDetailResponse, WorkoutResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// PUT /api/workouts/{workout_id}
///
/// ### Responses
/// - `200 OK` → `{ "workout": { … } }`
/// - `403 Forbidden` (not the owner and not an admin)
/// - `404 Not Found`
pub async fn update_workout(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(workout_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateWorkoutRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated = workout_service::update(
        state.db(),
        user.actor(),
        workout_id,
        WorkoutUpdate {
            name: req.name,
            description: req.description,
            is_template: req.is_template,
        },
    )
    .await?;

    Ok(Json(json!({ "workout": WorkoutResponse::from(updated) })))
}

/// PUT /api/workouts/{workout_id}/exercises
///
/// Replaces the whole exercise list; positions follow the order of the array.
///
/// ### Request Body
/// ```json
/// { "exercises": [ { "exercise_id": "…", "sets": 3, "reps": 12, "rest_seconds": 60 } ] }
/// ```
pub async fn replace_workout_exercises(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(workout_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<ReplaceExercisesRequest>,
) -> ApiResult<impl IntoResponse> {
    let lines = req.exercises.into_iter().map(Into::into).collect();
    let detail = workout_service::replace_exercises(state.db(), user.actor(), workout_id, lines).await?;
    Ok(Json(json!({ "workout": WorkoutDetailResponse::from(detail) })))
}
