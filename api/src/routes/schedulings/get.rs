use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::scheduling_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::{HistoryEntryResponse, ListSchedulingsQuery, SchedulingResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ApiQuery};

/// GET /api/schedulings
///
/// Lists the sessions the caller takes part in, soonest first.
///
/// ### Query Parameters
/// - `status` (optional): one of `PENDING_CONFIRMATION`, `SCHEDULED`, `RESCHEDULED`,
///   `IN_PROGRESS`, `COMPLETED`, `CANCELED`, `MISSED`
///
/// ### Responses
/// - `200 OK` → `{ "schedulings": [ … ] }`
/// - `400 Bad Request` (unknown status)
pub async fn list_schedulings(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<ListSchedulingsQuery>,
) -> ApiResult<impl IntoResponse> {
    let schedulings = scheduling_service::list(state.db(), user.actor(), query.status).await?;
    let schedulings: Vec<SchedulingResponse> = schedulings.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "schedulings": schedulings })))
}

/// GET /api/schedulings/{scheduling_id}
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "scheduling": {
///     "id": "…",
///     "personal_id": "…",
///     "student_id": "…",
///     "workout_id": null,
///     "date": "2026-11-01T10:00:00+00:00",
///     "type": "IN_PERSON",
///     "status": "SCHEDULED",
///     "started_at": null,
///     "completed_at": null,
///     "created_at": "…",
///     "updated_at": "…"
///   }
/// }
/// ```
/// - `404 Not Found` (missing, or the caller is not a participant)
pub async fn get_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let scheduling = scheduling_service::get(state.db(), user.actor(), scheduling_id).await?;
    Ok(Json(json!({ "scheduling": SchedulingResponse::from(scheduling) })))
}

/// GET /api/schedulings/{scheduling_id}/history
///
/// Status changes in the order they happened.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "history": [
///     { "status": "PENDING_CONFIRMATION", "changed_by": "PERSONAL", "reason": null, "notes": null, … },
///     { "status": "CANCELED", "changed_by": "STUDENT", "reason": "Feeling sick", "notes": null, … }
///   ]
/// }
/// ```
/// - `404 Not Found`
pub async fn get_history(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let entries = scheduling_service::history(state.db(), user.actor(), scheduling_id).await?;
    let history: Vec<HistoryEntryResponse> = entries.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "history": history })))
}
