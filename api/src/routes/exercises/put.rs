use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::exercise_service::{self, ExerciseUpdate};
use util::state::AppState;
use uuid::Uuid;

use super::common::{ExerciseResponse, UpdateExerciseRequest};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// PUT /api/exercises/{exercise_id}
///
/// ### Responses
/// - `200 OK` → `{ "exercise": { … } }`
/// - `403 Forbidden` (not the creator and not an admin)
/// - `404 Not Found`
pub async fn update_exercise(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(exercise_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateExerciseRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated = exercise_service::update(
        state.db(),
        user.actor(),
        exercise_id,
        ExerciseUpdate {
            name: req.name,
            description: req.description,
            muscle_group: req.muscle_group,
            equipment: req.equipment,
        },
    )
    .await?;

    Ok(Json(json!({ "exercise": ExerciseResponse::from(updated) })))
}
