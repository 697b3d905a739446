use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::scheduling_service::{self, SchedulingUpdate};
use util::state::AppState;
use uuid::Uuid;

use super::common::UpdateSchedulingRequest;
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// PUT /api/schedulings/{scheduling_id}
///
/// Edits a session. Moving the date without naming a status reschedules it.
///
/// ### Request Body
/// ```json
/// { "date": "2026-11-02T10:00:00Z", "type": "IN_PERSON", "status": "SCHEDULED", "workout_id": "…" }
/// ```
/// Every field is optional. `CANCELED` is refused here; cancel through `DELETE` with a reason.
///
/// ### Responses
/// - `200 OK` → `{ "message": "Scheduling updated successfully" }`
/// - `400 Bad Request` (date in the past, workout not usable by the trainer, status `CANCELED`)
/// - `404 Not Found`
/// - `409 Conflict` (terminal scheduling, or transition not allowed)
pub async fn update_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateSchedulingRequest>,
) -> ApiResult<impl IntoResponse> {
    scheduling_service::update(
        state.db(),
        user.actor(),
        scheduling_id,
        SchedulingUpdate {
            date: req.date,
            scheduling_type: req.scheduling_type,
            status: req.status,
            workout_id: req.workout_id,
        },
    )
    .await?;

    Ok(Json(json!({ "message": "Scheduling updated successfully" })))
}
