use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::exercise_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::{ExerciseResponse, ListExercisesQuery};
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ApiQuery};

/// GET /api/exercises
///
/// ### Query Parameters
/// - `muscle_group` (optional): case-insensitive exact match
///
/// ### Responses
/// - `200 OK` → `{ "exercises": [ { "id": "…", "name": "Squat", "muscle_group": "Legs", … } ] }`
pub async fn list_exercises(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListExercisesQuery>,
) -> ApiResult<impl IntoResponse> {
    let exercises = exercise_service::list(state.db(), query.muscle_group.as_deref()).await?;
    let exercises: Vec<ExerciseResponse> = exercises.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "exercises": exercises })))
}

/// GET /api/exercises/{exercise_id}
pub async fn get_exercise(
    State(state): State<AppState>,
    ApiPath(exercise_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let exercise = exercise_service::get(state.db(), exercise_id).await?;
    Ok(Json(json!({ "exercise": ExerciseResponse::from(exercise) })))
}
