//! Credential checks and the refresh/reset token flows.
//!
//! Access tokens (JWTs) are minted by the HTTP layer; this module only deals with what is
//! persisted.

use chrono::{Duration, Utc};
use db::models::{password_reset_token, refresh_token, user};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::{info, warn};

use crate::{Actor, AppError, AppResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const INVALID_REFRESH: &str = "Invalid or expired refresh token";

pub async fn login(db: &DatabaseConnection, email: &str, password: &str) -> AppResult<user::Model> {
    let Some(found) = user::Model::find_by_email(db, email).await? else {
        warn!(email = %user::normalize_email(email), "login failed: unknown email");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !found.verify_password(password) {
        warn!(user_id = %found.id, "login failed: wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    info!(user_id = %found.id, "user logged in");
    Ok(found)
}

/// Stores a new refresh token for `user_id` and returns its raw value.
pub async fn issue_refresh_token(
    db: &DatabaseConnection,
    user_id: uuid::Uuid,
    valid_for_days: i64,
) -> AppResult<String> {
    let (_, raw) = refresh_token::Model::issue(db, user_id, valid_for_days).await?;
    Ok(raw)
}

/// Exchanges a refresh token for a new one. The presented token is revoked.
pub async fn rotate_refresh_token(
    db: &DatabaseConnection,
    raw: &str,
    valid_for_days: i64,
) -> AppResult<(user::Model, String)> {
    let now = Utc::now();
    let txn = db.begin().await?;

    let Some(presented) = refresh_token::Model::find_active(&txn, raw, now).await? else {
        return Err(AppError::Unauthorized(INVALID_REFRESH.into()));
    };
    let Some(owner) = user::Entity::find_by_id(presented.user_id).one(&txn).await? else {
        return Err(AppError::Unauthorized(INVALID_REFRESH.into()));
    };

    presented.revoke(&txn).await?;
    let (_, fresh) = refresh_token::Model::issue(&txn, owner.id, valid_for_days).await?;
    txn.commit().await?;

    info!(user_id = %owner.id, "refresh token rotated");
    Ok((owner, fresh))
}

/// Revokes the caller's refresh token. Unknown tokens or tokens of other users are ignored.
pub async fn logout(db: &DatabaseConnection, actor: Actor, raw: &str) -> AppResult<()> {
    if let Some(token) = refresh_token::Model::find_active(db, raw, Utc::now()).await? {
        if token.user_id == actor.id {
            token.revoke(db).await?;
            info!(user_id = %actor.id, "user logged out");
        }
    }
    Ok(())
}

/// A reset token together with the account it was issued for.
#[derive(Debug, Clone)]
pub struct IssuedReset {
    pub user: user::Model,
    pub token: password_reset_token::Model,
}

/// Starts a password reset.
///
/// Returns `None` for unknown emails and for accounts that already received
/// `max_per_hour` tokens in the last hour, so callers can answer identically either way.
/// The raw token is never logged; delivering it is up to the caller.
pub async fn request_password_reset(
    db: &DatabaseConnection,
    email: &str,
    expiry_minutes: i64,
    max_per_hour: u32,
) -> AppResult<Option<IssuedReset>> {
    let Some(found) = user::Model::find_by_email(db, email).await? else {
        info!("password reset requested for unknown email");
        return Ok(None);
    };

    let since = Utc::now() - Duration::hours(1);
    let recent = password_reset_token::Model::count_issued_since(db, found.id, since).await?;
    if recent >= u64::from(max_per_hour) {
        warn!(user_id = %found.id, recent, "password reset limit reached");
        return Ok(None);
    }

    let token = password_reset_token::Model::create(db, found.id, expiry_minutes).await?;
    info!(user_id = %found.id, expires_at = %token.expires_at, "password reset token issued");
    Ok(Some(IssuedReset { user: found, token }))
}

/// Consumes a reset token, sets the new password and revokes all refresh tokens.
pub async fn reset_password(db: &DatabaseConnection, token: &str, new_password: &str) -> AppResult<()> {
    let now = Utc::now();
    let txn = db.begin().await?;

    let Some(reset) = password_reset_token::Model::find_valid_token(&txn, token, now).await? else {
        return Err(AppError::BadRequest("Invalid or expired reset token".into()));
    };
    let owner = user::Entity::find_by_id(reset.user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    let mut active: user::ActiveModel = owner.into();
    active.password_hash = Set(user::Model::hash_password(new_password)?);
    active.updated_at = Set(now);
    let updated = active.update(&txn).await?;

    reset.mark_as_used(&txn).await?;
    refresh_token::Model::revoke_all_for_user(&txn, updated.id).await?;
    txn.commit().await?;

    info!(user_id = %updated.id, "password reset completed");
    Ok(())
}
