use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::plan_service;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::plans::common::SubscriptionResponse;

/// GET /api/subscriptions
///
/// The caller's subscriptions, active and canceled.
///
/// ### Responses
/// - `200 OK` → `{ "subscriptions": [ { "id": "…", "plan_id": "…", "status": "ACTIVE", … } ] }`
pub async fn list_subscriptions(State(state): State<AppState>, user: AuthUser) -> ApiResult<impl IntoResponse> {
    let subscriptions = plan_service::list_subscriptions(state.db(), user.actor()).await?;
    let subscriptions: Vec<SubscriptionResponse> = subscriptions.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "subscriptions": subscriptions })))
}
