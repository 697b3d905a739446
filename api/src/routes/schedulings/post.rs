use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use services::scheduling_service::{self, NewScheduling};
use util::state::AppState;
use uuid::Uuid;

use super::common::{CreateSchedulingRequest, MissedRequest, SchedulingResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, OptionalJson, ValidatedJson};

/// POST /api/schedulings
///
/// Books a session. The caller must be one of the two participants, or an admin.
///
/// ### Request Body
/// ```json
/// {
///   "personal_id": "…",
///   "student_id": "…",
///   "workout_id": null,
///   "date": "2026-11-01T10:00:00Z",
///   "type": "ONLINE"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` → `{ "scheduling": { …, "status": "PENDING_CONFIRMATION" } }`
/// - `400 Bad Request` (date in the past, ids of the wrong role, unknown workout)
/// - `403 Forbidden` (caller is not a participant)
pub async fn create_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSchedulingRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = scheduling_service::create(
        state.db(),
        user.actor(),
        NewScheduling {
            personal_id: req.personal_id,
            student_id: req.student_id,
            workout_id: req.workout_id,
            date: req.date,
            scheduling_type: req.scheduling_type,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "scheduling": SchedulingResponse::from(created) })),
    ))
}

/// POST /api/schedulings/{scheduling_id}/confirm
///
/// ### Responses
/// - `200 OK` → `{ "scheduling": { …, "status": "SCHEDULED" } }`
/// - `404 Not Found`
/// - `409 Conflict` (transition not allowed from the current status)
pub async fn confirm_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let updated = scheduling_service::confirm(state.db(), user.actor(), scheduling_id).await?;
    Ok(Json(json!({ "scheduling": SchedulingResponse::from(updated) })))
}

/// POST /api/schedulings/{scheduling_id}/start
///
/// Moves the session to `IN_PROGRESS` and stamps `started_at`.
pub async fn start_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let updated = scheduling_service::start(state.db(), user.actor(), scheduling_id).await?;
    Ok(Json(json!({ "scheduling": SchedulingResponse::from(updated) })))
}

/// POST /api/schedulings/{scheduling_id}/complete
///
/// Only a session in `IN_PROGRESS` can be completed.
pub async fn complete_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let updated = scheduling_service::complete(state.db(), user.actor(), scheduling_id).await?;
    Ok(Json(json!({ "scheduling": SchedulingResponse::from(updated) })))
}

/// POST /api/schedulings/{scheduling_id}/missed
///
/// ### Request Body (optional)
/// ```json
/// { "notes": "Student did not show up" }
/// ```
pub async fn mark_missed(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
    OptionalJson(req): OptionalJson<MissedRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated =
        scheduling_service::mark_missed(state.db(), user.actor(), scheduling_id, req.notes).await?;
    Ok(Json(json!({ "scheduling": SchedulingResponse::from(updated) })))
}
