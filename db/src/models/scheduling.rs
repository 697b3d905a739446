use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A booked session between a trainer (`personal_id`) and a student.
///
/// Rows are never deleted. Cancellation is a status, and every status change
/// leaves a row in `scheduling_history`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedulings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub personal_id: Uuid,
    pub student_id: Uuid,
    pub workout_id: Option<Uuid>,
    /// When the session is meant to happen.
    pub date: DateTime<Utc>,
    #[sea_orm(column_name = "type")]
    pub scheduling_type: SchedulingType,
    pub status: SchedulingStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scheduling_type")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SchedulingType {
    #[sea_orm(string_value = "ONLINE")]
    Online,

    #[sea_orm(string_value = "IN_PERSON")]
    InPerson,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scheduling_status")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SchedulingStatus {
    #[sea_orm(string_value = "PENDING_CONFIRMATION")]
    PendingConfirmation,

    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,

    #[sea_orm(string_value = "RESCHEDULED")]
    Rescheduled,

    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,

    #[sea_orm(string_value = "COMPLETED")]
    Completed,

    #[sea_orm(string_value = "CANCELED")]
    Canceled,

    #[sea_orm(string_value = "MISSED")]
    Missed,
}

impl SchedulingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled | Self::Missed)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// `RESCHEDULED -> RESCHEDULED` is allowed so a session can be moved more than once.
    pub fn can_transition_to(self, next: SchedulingStatus) -> bool {
        use SchedulingStatus::*;

        match self {
            PendingConfirmation => matches!(
                next,
                Scheduled | Rescheduled | InProgress | Canceled | Missed
            ),
            Scheduled => matches!(next, Rescheduled | InProgress | Canceled | Missed),
            Rescheduled => matches!(
                next,
                Scheduled | Rescheduled | InProgress | Canceled | Missed
            ),
            InProgress => matches!(next, Completed | Canceled),
            Completed | Canceled | Missed => false,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PersonalId",
        to = "super::user::Column::Id"
    )]
    Personal,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::workout::Entity",
        from = "Column::WorkoutId",
        to = "super::workout::Column::Id"
    )]
    Workout,

    #[sea_orm(has_many = "super::scheduling_history::Entity")]
    History,
}

impl Related<super::workout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workout.def()
    }
}

impl Related<super::scheduling_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.personal_id == user_id || self.student_id == user_id
    }

    /// Fetches a scheduling only if `user_id` is one of its two participants.
    pub async fn find_for_participant<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id)
            .filter(participant_condition(user_id))
            .one(db)
            .await
    }

    /// Lists the schedulings `user_id` takes part in, soonest first.
    pub async fn list_for_participant<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        status: Option<SchedulingStatus>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(participant_condition(user_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        }
        query.order_by_asc(Column::Date).all(db).await
    }
}

fn participant_condition(user_id: Uuid) -> Condition {
    Condition::any()
        .add(Column::PersonalId.eq(user_id))
        .add(Column::StudentId.eq(user_id))
}
