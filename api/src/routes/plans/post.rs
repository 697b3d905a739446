use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use services::plan_service::{self, NewPlan};
use util::state::AppState;
use uuid::Uuid;

use super::common::{CreatePlanRequest, PlanResponse, SubscriptionResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// POST /api/plans
///
/// ### Request Body
/// ```json
/// { "name": "Monthly", "description": "Two sessions a week", "price_cents": 9900, "duration_days": 30 }
/// ```
///
/// ### Responses
/// - `201 Created` → `{ "plan": { …, "active": true } }`
/// - `400 Bad Request`
/// - `403 Forbidden` (students)
pub async fn create_plan(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePlanRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = plan_service::create(
        state.db(),
        user.actor(),
        NewPlan {
            name: req.name,
            description: req.description,
            price_cents: req.price_cents,
            duration_days: req.duration_days,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "plan": PlanResponse::from(created) }))))
}

/// POST /api/plans/{plan_id}/subscribe
///
/// ### Responses
/// - `201 Created`
/// ```json
/// { "subscription": { "id": "…", "plan_id": "…", "status": "ACTIVE", "started_at": "…", "expires_at": "…", "canceled_at": null } }
/// ```
/// - `403 Forbidden` (not a student)
/// - `404 Not Found`
/// - `409 Conflict` (plan inactive, or already subscribed)
pub async fn subscribe(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(plan_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let created = plan_service::subscribe(state.db(), user.actor(), plan_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "subscription": SubscriptionResponse::from(created) })),
    ))
}
