use db::models::{
    plan,
    subscription::{self, SubscriptionStatus},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub id: Uuid,
    pub personal_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_days: i32,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<plan::Model> for PlanResponse {
    fn from(p: plan::Model) -> Self {
        Self {
            id: p.id,
            personal_id: p.personal_id,
            name: p.name,
            description: p.description,
            price_cents: p.price_cents,
            duration_days: p.duration_days,
            active: p.active,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub student_id: Uuid,
    pub status: SubscriptionStatus,
    pub started_at: String,
    pub expires_at: String,
    pub canceled_at: Option<String>,
}

impl From<subscription::Model> for SubscriptionResponse {
    fn from(s: subscription::Model) -> Self {
        Self {
            id: s.id,
            plan_id: s.plan_id,
            student_id: s.student_id,
            status: s.status,
            started_at: s.started_at.to_rfc3339(),
            expires_at: s.expires_at.to_rfc3339(),
            canceled_at: s.canceled_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPlansQuery {
    pub personal_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(range(min = 1, max = 365))]
    pub duration_days: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[validate(range(min = 1, max = 365))]
    pub duration_days: Option<i32>,
    pub active: Option<bool>,
}
