use chrono::Utc;
use db::models::{
    refresh_token,
    user::{self, Role},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

use crate::{Actor, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Creates an account. Self-registration is limited to students and trainers.
pub async fn register(db: &DatabaseConnection, input: Registration) -> AppResult<user::Model> {
    if input.role == Role::Admin {
        return Err(AppError::BadRequest(
            "role must be STUDENT or PERSONAL".into(),
        ));
    }
    if user::Model::find_by_email(db, &input.email).await?.is_some() {
        return Err(AppError::Conflict("Email is already registered".into()));
    }

    let created = user::Model::create(db, &input.name, &input.email, &input.password, input.role).await?;
    info!(user_id = %created.id, role = %created.role, "user registered");
    Ok(created)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> AppResult<user::Model> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User"))
}

pub async fn list(db: &DatabaseConnection, role: Option<Role>) -> AppResult<Vec<user::Model>> {
    Ok(user::Model::list_by_role(db, role).await?)
}

/// Updates the caller's own profile. A password change revokes every refresh token.
pub async fn update_profile(
    db: &DatabaseConnection,
    actor: Actor,
    changes: ProfileUpdate,
) -> AppResult<user::Model> {
    let current = get(db, actor.id).await?;
    let password_changed = changes.password.is_some();

    let txn = db.begin().await?;

    let mut active: user::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name.trim().to_owned());
    }
    if let Some(phone) = changes.phone {
        let phone = phone.trim().to_owned();
        active.phone = Set((!phone.is_empty()).then_some(phone));
    }
    if let Some(password) = changes.password {
        active.password_hash = Set(user::Model::hash_password(&password)?);
        refresh_token::Model::revoke_all_for_user(&txn, actor.id).await?;
    }
    active.updated_at = Set(Utc::now());
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    if password_changed {
        info!(user_id = %updated.id, "password changed");
    }
    Ok(updated)
}
