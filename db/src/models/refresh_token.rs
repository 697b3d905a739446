use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use sha2::{Digest, Sha256};

/// Long-lived opaque token exchanged for new access tokens.
///
/// Only the SHA-256 of the token is stored. The raw value is handed to the client once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "refresh_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const TOKEN_LENGTH: usize = 48;

impl Model {
    /// Issues a new refresh token for a user.
    ///
    /// # Arguments
    ///
    /// * `db` - Connection or open transaction.
    /// * `user_id` - Owner of the token.
    /// * `valid_for_days` - Lifetime of the token.
    ///
    /// # Returns
    ///
    /// The stored row and the raw token. The raw token cannot be recovered later.
    pub async fn issue<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        valid_for_days: i64,
    ) -> Result<(Model, String), DbErr> {
        let raw: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let now = Utc::now();
        let stored = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(hash_token(&raw)),
            expires_at: Set(now + Duration::days(valid_for_days)),
            revoked: Set(false),
            created_at: Set(now),
        }
        .insert(db)
        .await?;

        Ok((stored, raw))
    }

    /// Looks up an unrevoked, unexpired token by its raw value.
    pub async fn find_active<C: ConnectionTrait>(
        db: &C,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::TokenHash.eq(hash_token(raw)))
            .filter(Column::Revoked.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .one(db)
            .await
    }

    pub async fn revoke<C: ConnectionTrait>(&self, db: &C) -> Result<(), DbErr> {
        let mut active_model: ActiveModel = self.clone().into();
        active_model.revoked = Set(true);
        active_model.update(db).await?;
        Ok(())
    }

    /// Revokes every outstanding token of a user, e.g. after a password change.
    pub async fn revoke_all_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Revoked, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Revoked.eq(false))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

pub fn hash_token(raw: &str) -> String {
    hex::encode(Sha256::digest(raw.as_bytes()))
}
