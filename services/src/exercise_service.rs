use chrono::Utc;
use db::models::exercise::{self, ExerciseFields};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::info;
use uuid::Uuid;

use crate::{Actor, AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
}

pub async fn list(db: &DatabaseConnection, muscle_group: Option<&str>) -> AppResult<Vec<exercise::Model>> {
    Ok(exercise::Model::list(db, muscle_group).await?)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> AppResult<exercise::Model> {
    exercise::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Exercise"))
}

pub async fn create(db: &DatabaseConnection, actor: Actor, fields: ExerciseFields) -> AppResult<exercise::Model> {
    let created = exercise::Model::create(db, actor.id, fields).await?;
    info!(exercise_id = %created.id, created_by = %actor.id, "exercise created");
    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    changes: ExerciseUpdate,
) -> AppResult<exercise::Model> {
    let current = get_modifiable(db, actor, id).await?;

    let mut active: exercise::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        active.description = Set(Some(description));
    }
    if let Some(group) = changes.muscle_group {
        active.muscle_group = Set(Some(group));
    }
    if let Some(equipment) = changes.equipment {
        active.equipment = Set(Some(equipment));
    }
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<()> {
    let current = get_modifiable(db, actor, id).await?;
    current.delete(db).await?;
    info!(exercise_id = %id, "exercise deleted");
    Ok(())
}

async fn get_modifiable(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<exercise::Model> {
    let current = get(db, id).await?;
    if !actor.can_modify(current.created_by) {
        return Err(AppError::Forbidden(
            "Only the creator or an admin can modify this exercise".into(),
        ));
    }
    Ok(current)
}
