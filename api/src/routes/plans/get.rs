use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::plan_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::{ListPlansQuery, PlanResponse};
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ApiQuery};

/// GET /api/plans
///
/// Active plans, optionally narrowed to one trainer.
///
/// ### Query Parameters
/// - `personal_id` (optional)
///
/// ### Responses
/// - `200 OK` → `{ "plans": [ { "id": "…", "name": "Monthly", "price_cents": 9900, "duration_days": 30, … } ] }`
pub async fn list_plans(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPlansQuery>,
) -> ApiResult<impl IntoResponse> {
    let plans = plan_service::list(state.db(), query.personal_id).await?;
    let plans: Vec<PlanResponse> = plans.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "plans": plans })))
}

/// GET /api/plans/{plan_id}
///
/// Inactive plans are still returned here.
pub async fn get_plan(
    State(state): State<AppState>,
    ApiPath(plan_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let plan = plan_service::get(state.db(), plan_id).await?;
    Ok(Json(json!({ "plan": PlanResponse::from(plan) })))
}
