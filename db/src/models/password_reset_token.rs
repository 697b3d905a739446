use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, PaginatorTrait, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "password_reset_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
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

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        expiry_minutes: i64,
    ) -> Result<Self, DbErr> {
        let token = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect::<String>();

        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token: Set(token),
            expires_at: Set(now + Duration::minutes(expiry_minutes)),
            used: Set(false),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn find_valid_token<C: ConnectionTrait>(
        db: &C,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Token.eq(token))
            .filter(Column::Used.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .one(db)
            .await
    }

    /// Tokens issued to `user_id` at or after `since`, used or not.
    pub async fn count_issued_since<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CreatedAt.gte(since))
            .count(db)
            .await
    }

    pub async fn mark_as_used<C: ConnectionTrait>(&self, db: &C) -> Result<(), DbErr> {
        let mut active_model: ActiveModel = self.clone().into();
        active_model.used = Set(true);
        active_model.update(db).await?;
        Ok(())
    }
}
