use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::analytics_service;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResult;

/// GET /api/analytics/schedulings
///
/// Counts over every session the caller takes part in.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "summary": {
///     "total": 12,
///     "by_status": { "CANCELED": 1, "COMPLETED": 8, "IN_PROGRESS": 0, "MISSED": 1, "PENDING_CONFIRMATION": 1, "RESCHEDULED": 0, "SCHEDULED": 1 },
///     "completed_last_30_days": 5,
///     "upcoming": 2
///   }
/// }
/// ```
pub async fn scheduling_summary(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let summary = analytics_service::scheduling_summary(state.db(), user.actor()).await?;
    Ok(Json(json!({ "summary": summary })))
}
