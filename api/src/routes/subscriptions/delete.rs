use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::plan_service;
use util::state::AppState;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ApiPath;
use crate::routes::plans::common::SubscriptionResponse;

/// DELETE /api/subscriptions/{subscription_id}
///
/// Cancels the subscription; the record is kept.
///
/// ### Responses
/// - `200 OK` → `{ "subscription": { …, "status": "CANCELED" } }`
/// - `404 Not Found` (missing or someone else's)
/// - `409 Conflict` (already canceled)
pub async fn cancel_subscription(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(subscription_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let canceled = plan_service::cancel_subscription(state.db(), user.actor(), subscription_id).await?;
    Ok(Json(json!({ "subscription": SubscriptionResponse::from(canceled) })))
}
