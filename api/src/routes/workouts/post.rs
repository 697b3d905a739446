use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use services::workout_service::{self, NewWorkout};
use util::state::AppState;

use super::common::{CreateWorkoutRequest, WorkoutDetailResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ValidatedJson;

/// POST /api/workouts
///
/// ### Request Body
/// ```json
/// {
///   "name": "Leg day",
///   "description": null,
///   "is_template": true,
///   "exercises": [ { "exercise_id": "…", "sets": 4, "reps": 8, "rest_seconds": 90 } ]
/// }
/// ```
///
/// ### Responses
/// - `201 Created` → `{ "workout": { …, "exercises": [ … ] } }`
/// - `400 Bad Request` (validation failure or unknown exercise)
/// ```json
/// { "error": "Bad Request", "message": "exercises[0].sets: must be between 1 and 20" }
/// ```
pub async fn create_workout(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateWorkoutRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = workout_service::create(
        state.db(),
        user.actor(),
        NewWorkout {
            name: req.name,
            description: req.description,
            is_template: req.is_template,
            exercises: req.exercises.into_iter().map(Into::into).collect(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "workout": WorkoutDetailResponse::from(created) })),
    ))
}
