use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Func;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

/// A catalog entry describing a single movement, reusable across workouts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,

    #[sea_orm(has_many = "super::workout_exercise::Entity")]
    WorkoutExercises,
}

impl Related<super::workout_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default)]
pub struct ExerciseFields {
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        created_by: Uuid,
        fields: ExerciseFields,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(fields.name),
            description: Set(fields.description),
            muscle_group: Set(fields.muscle_group),
            equipment: Set(fields.equipment),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    /// Optionally narrowed to one muscle group (case-insensitive), ordered by name.
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        muscle_group: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().order_by_asc(Column::Name);
        if let Some(group) = muscle_group {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::MuscleGroup))).eq(group.to_lowercase()),
            );
        }
        query.all(db).await
    }
}
