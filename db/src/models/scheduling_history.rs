use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

use super::scheduling::SchedulingStatus;
use super::user::Role;

/// Append-only audit trail of scheduling status changes. Rows are inserted, never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduling_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub scheduling_id: Uuid,
    /// The user who made the change.
    pub user_id: Uuid,
    /// Status the scheduling moved into.
    pub status: SchedulingStatus,
    pub changed_at: DateTime<Utc>,
    /// Role of `user_id` when the change was made.
    pub changed_by: Role,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scheduling::Entity",
        from = "Column::SchedulingId",
        to = "super::scheduling::Column::Id",
        on_delete = "Cascade"
    )]
    Scheduling,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::scheduling::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scheduling.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A status change waiting to be written.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub scheduling_id: Uuid,
    pub user_id: Uuid,
    pub changed_by: Role,
    pub status: SchedulingStatus,
    pub changed_at: DateTime<Utc>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

impl Model {
    pub async fn record<C: ConnectionTrait>(db: &C, entry: NewEntry) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            scheduling_id: Set(entry.scheduling_id),
            user_id: Set(entry.user_id),
            status: Set(entry.status),
            changed_at: Set(entry.changed_at),
            changed_by: Set(entry.changed_by),
            reason: Set(entry.reason),
            notes: Set(entry.notes),
        }
        .insert(db)
        .await
    }

    /// Oldest first.
    pub async fn find_for_scheduling<C: ConnectionTrait>(
        db: &C,
        scheduling_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::SchedulingId.eq(scheduling_id))
            .order_by_asc(Column::ChangedAt)
            .all(db)
            .await
    }
}
