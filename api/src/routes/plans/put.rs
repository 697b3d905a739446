use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::plan_service::{self, PlanUpdate};
use util::state::AppState;
use uuid::Uuid;

use super::common::{PlanResponse, UpdatePlanRequest};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ValidatedJson};

/// PUT /api/plans/{plan_id}
///
/// Setting `"active": false` withdraws the plan from sale. Existing subscriptions are untouched.
///
/// ### Responses
/// - `200 OK` → `{ "plan": { … } }`
/// - `403 Forbidden` (not the owner and not an admin)
/// - `404 Not Found`
pub async fn update_plan(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(plan_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdatePlanRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated = plan_service::update(
        state.db(),
        user.actor(),
        plan_id,
        PlanUpdate {
            name: req.name,
            description: req.description,
            price_cents: req.price_cents,
            duration_days: req.duration_days,
            active: req.active,
        },
    )
    .await?;

    Ok(Json(json!({ "plan": PlanResponse::from(updated) })))
}
