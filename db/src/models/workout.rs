use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, ConnectionTrait, QueryOrder, Set};

/// A trainer-owned workout. Templates are visible to every authenticated user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workouts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub personal_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_template: bool,
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

    #[sea_orm(has_many = "super::workout_exercise::Entity")]
    WorkoutExercises,
}

impl Related<super::workout_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        personal_id: Uuid,
        name: &str,
        description: Option<String>,
        is_template: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            personal_id: Set(personal_id),
            name: Set(name.to_owned()),
            description: Set(description),
            is_template: Set(is_template),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        self.is_template || self.personal_id == user_id
    }

    /// Every template plus the caller's own workouts, ordered by name.
    pub async fn list_visible_to<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::IsTemplate.eq(true))
                    .add(Column::PersonalId.eq(user_id)),
            )
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }
}
