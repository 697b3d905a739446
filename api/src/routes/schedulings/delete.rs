use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::scheduling_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::CancelSchedulingRequest;
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// DELETE /api/schedulings/{scheduling_id}
///
/// Cancels a session. Nothing is removed; the reason lands in the history.
///
/// ### Request Body
/// ```json
/// { "reason": "Feeling sick" }
/// ```
///
/// ### Responses
/// - `200 OK` → `{ "message": "Scheduling canceled successfully" }`
/// - `400 Bad Request`
/// ```json
/// { "error": "Bad Request", "message": "reason: Reason must be between 5 and 500 characters" }
/// ```
/// - `404 Not Found`
/// - `409 Conflict` (already canceled or otherwise finished)
pub async fn cancel_scheduling(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(scheduling_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CancelSchedulingRequest>,
) -> ApiResult<impl IntoResponse> {
    scheduling_service::cancel(state.db(), user.actor(), scheduling_id, req.reason).await?;
    Ok(Json(json!({ "message": "Scheduling canceled successfully" })))
}
