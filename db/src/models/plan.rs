use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

/// A priced, time-bounded offering published by a trainer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub personal_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_days: i32,
    /// Inactive plans stay readable but accept no new subscriptions.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PersonalId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Personal,

    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        personal_id: Uuid,
        name: &str,
        description: Option<String>,
        price_cents: i64,
        duration_days: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            personal_id: Set(personal_id),
            name: Set(name.to_owned()),
            description: Set(description),
            price_cents: Set(price_cents),
            duration_days: Set(duration_days),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    /// Active plans, cheapest first, optionally for a single trainer.
    pub async fn list_active<C: ConnectionTrait>(
        db: &C,
        personal_id: Option<Uuid>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(Column::Active.eq(true));
        if let Some(personal_id) = personal_id {
            query = query.filter(Column::PersonalId.eq(personal_id));
        }
        query
            .order_by_asc(Column::PriceCents)
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }
}
