use chrono::Utc;
use db::models::{
    plan,
    subscription::{self, SubscriptionStatus},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

use crate::{Actor, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_days: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_days: Option<i32>,
    pub active: Option<bool>,
}

pub async fn list(db: &DatabaseConnection, personal_id: Option<Uuid>) -> AppResult<Vec<plan::Model>> {
    Ok(plan::Model::list_active(db, personal_id).await?)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> AppResult<plan::Model> {
    plan::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Plan"))
}

pub async fn create(db: &DatabaseConnection, actor: Actor, input: NewPlan) -> AppResult<plan::Model> {
    let created = plan::Model::create(
        db,
        actor.id,
        input.name.trim(),
        input.description,
        input.price_cents,
        input.duration_days,
    )
    .await?;
    info!(plan_id = %created.id, owner = %actor.id, "plan created");
    Ok(created)
}

/// Existing subscriptions keep the terms they were created with.
pub async fn update(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    changes: PlanUpdate,
) -> AppResult<plan::Model> {
    let current = get(db, id).await?;
    if !actor.can_modify(current.personal_id) {
        return Err(AppError::Forbidden(
            "Only the owner or an admin can modify this plan".into(),
        ));
    }

    let mut active: plan::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name.trim().to_owned());
    }
    if let Some(description) = changes.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = changes.price_cents {
        active.price_cents = Set(price);
    }
    if let Some(days) = changes.duration_days {
        active.duration_days = Set(days);
    }
    if let Some(flag) = changes.active {
        active.active = Set(flag);
    }
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Enrols the calling student in a plan.
///
/// # Errors
///
/// * `NotFound` if the plan does not exist.
/// * `Conflict` if the plan is inactive or the student already holds an active subscription to it.
pub async fn subscribe(db: &DatabaseConnection, actor: Actor, plan_id: Uuid) -> AppResult<subscription::Model> {
    let now = Utc::now();
    let target = get(db, plan_id).await?;

    if !target.active {
        return Err(AppError::Conflict("Plan is not accepting subscriptions".into()));
    }
    if subscription::Model::find_active(db, target.id, actor.id).await?.is_some() {
        return Err(AppError::Conflict("Already subscribed to this plan".into()));
    }

    let created = subscription::Model::create(db, &target, actor.id, now).await?;
    info!(subscription_id = %created.id, plan_id = %target.id, student_id = %actor.id, "subscription created");
    Ok(created)
}

pub async fn list_subscriptions(db: &DatabaseConnection, actor: Actor) -> AppResult<Vec<subscription::Model>> {
    Ok(subscription::Model::list_for_student(db, actor.id).await?)
}

pub async fn cancel_subscription(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<subscription::Model> {
    let found = match subscription::Entity::find_by_id(id).one(db).await? {
        Some(found) if found.student_id == actor.id => found,
        _ => return Err(AppError::not_found("Subscription")),
    };
    if found.status == SubscriptionStatus::Canceled {
        return Err(AppError::Conflict("Subscription is already canceled".into()));
    }

    let canceled = found.cancel(db, Utc::now()).await?;
    info!(subscription_id = %canceled.id, "subscription canceled");
    Ok(canceled)
}
