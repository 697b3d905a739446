use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::exercise::ExerciseFields;
use serde_json::json;
use services::exercise_service;
use util::state::AppState;

use super::common::{CreateExerciseRequest, ExerciseResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ValidatedJson;

/// POST /api/exercises
///
/// ### Request Body
/// ```json
/// { "name": "Squat", "description": "Back squat", "muscle_group": "Legs", "equipment": "Barbell" }
/// ```
///
/// ### Responses
/// - `201 Created` → `{ "exercise": { … } }`
/// - `400 Bad Request`
/// - `403 Forbidden` (students)
pub async fn create_exercise(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateExerciseRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = exercise_service::create(
        state.db(),
        user.actor(),
        ExerciseFields {
            name: req.name,
            description: req.description,
            muscle_group: req.muscle_group,
            equipment: req.equipment,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "exercise": ExerciseResponse::from(created) })),
    ))
}
