use chrono::Utc;
use db::models::{
    exercise,
    workout,
    workout_exercise::{self, Line},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::{Actor, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub description: Option<String>,
    pub is_template: bool,
    pub exercises: Vec<Line>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_template: Option<bool>,
}

/// A workout together with its ordered exercise lines.
#[derive(Debug, Clone)]
pub struct WorkoutDetail {
    pub workout: workout::Model,
    pub exercises: Vec<workout_exercise::Model>,
}

pub async fn list(db: &DatabaseConnection, actor: Actor) -> AppResult<Vec<workout::Model>> {
    Ok(workout::Model::list_visible_to(db, actor.id).await?)
}

pub async fn get(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<WorkoutDetail> {
    let found = find_visible(db, actor, id).await?;
    let exercises = workout_exercise::Model::for_workout(db, found.id).await?;
    Ok(WorkoutDetail {
        workout: found,
        exercises,
    })
}

pub async fn create(db: &DatabaseConnection, actor: Actor, input: NewWorkout) -> AppResult<WorkoutDetail> {
    ensure_exercises_exist(db, &input.exercises).await?;

    let txn = db.begin().await?;
    let created = workout::Model::create(
        &txn,
        actor.id,
        input.name.trim(),
        input.description,
        input.is_template,
    )
    .await?;
    let exercises = workout_exercise::Model::replace_for_workout(&txn, created.id, &input.exercises).await?;
    txn.commit().await?;

    info!(workout_id = %created.id, owner = %actor.id, lines = exercises.len(), "workout created");
    Ok(WorkoutDetail {
        workout: created,
        exercises,
    })
}

pub async fn update(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    changes: WorkoutUpdate,
) -> AppResult<workout::Model> {
    let current = find_modifiable(db, actor, id).await?;

    let mut active: workout::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name.trim().to_owned());
    }
    if let Some(description) = changes.description {
        active.description = Set(Some(description));
    }
    if let Some(is_template) = changes.is_template {
        active.is_template = Set(is_template);
    }
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Replaces the ordered exercise list of a workout.
pub async fn replace_exercises(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    lines: Vec<Line>,
) -> AppResult<WorkoutDetail> {
    let current = find_modifiable(db, actor, id).await?;
    ensure_exercises_exist(db, &lines).await?;

    let txn = db.begin().await?;
    let exercises = workout_exercise::Model::replace_for_workout(&txn, current.id, &lines).await?;
    let mut active: workout::ActiveModel = current.into();
    active.updated_at = Set(Utc::now());
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(WorkoutDetail {
        workout: updated,
        exercises,
    })
}

pub async fn delete(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<()> {
    let current = find_modifiable(db, actor, id).await?;
    current.delete(db).await?;
    info!(workout_id = %id, "workout deleted");
    Ok(())
}

async fn find_visible(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<workout::Model> {
    match workout::Entity::find_by_id(id).one(db).await? {
        Some(found) if found.is_visible_to(actor.id) || actor.is_admin() => Ok(found),
        _ => Err(AppError::not_found("Workout")),
    }
}

async fn find_modifiable(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<workout::Model> {
    let found = find_visible(db, actor, id).await?;
    if !actor.can_modify(found.personal_id) {
        return Err(AppError::Forbidden(
            "Only the owner or an admin can modify this workout".into(),
        ));
    }
    Ok(found)
}

async fn ensure_exercises_exist(db: &DatabaseConnection, lines: &[Line]) -> AppResult<()> {
    let mut ids: Vec<Uuid> = lines.iter().map(|line| line.exercise_id).collect();
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Ok(());
    }

    let found = exercise::Entity::find()
        .filter(exercise::Column::Id.is_in(ids.clone()))
        .count(db)
        .await?;
    if found != ids.len() as u64 {
        return Err(AppError::BadRequest(
            "exercises contains an unknown exercise_id".into(),
        ));
    }
    Ok(())
}
