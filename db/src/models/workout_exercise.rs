use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

/// One ordered line of a workout.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    /// Zero-based order within the workout.
    pub position: i32,
    pub sets: i32,
    pub reps: i32,
    pub rest_seconds: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workout::Entity",
        from = "Column::WorkoutId",
        to = "super::workout::Column::Id",
        on_delete = "Cascade"
    )]
    Workout,

    #[sea_orm(
        belongs_to = "super::exercise::Entity",
        from = "Column::ExerciseId",
        to = "super::exercise::Column::Id",
        on_delete = "Cascade"
    )]
    Exercise,
}

impl Related<super::workout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workout.def()
    }
}

impl Related<super::exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub exercise_id: Uuid,
    pub sets: i32,
    pub reps: i32,
    pub rest_seconds: Option<i32>,
}

impl Model {
    pub async fn for_workout<C: ConnectionTrait>(
        db: &C,
        workout_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::WorkoutId.eq(workout_id))
            .order_by_asc(Column::Position)
            .all(db)
            .await
    }

    /// Replaces the whole exercise list of a workout, numbering lines in the given order.
    ///
    /// Run it inside a transaction; the delete and the inserts are separate statements.
    pub async fn replace_for_workout<C: ConnectionTrait>(
        db: &C,
        workout_id: Uuid,
        lines: &[Line],
    ) -> Result<Vec<Model>, DbErr> {
        Entity::delete_many()
            .filter(Column::WorkoutId.eq(workout_id))
            .exec(db)
            .await?;

        let mut inserted = Vec::with_capacity(lines.len());
        for (position, line) in lines.iter().enumerate() {
            let model = ActiveModel {
                id: Set(Uuid::new_v4()),
                workout_id: Set(workout_id),
                exercise_id: Set(line.exercise_id),
                position: Set(position as i32),
                sets: Set(line.sets),
                reps: Set(line.reps),
                rest_seconds: Set(line.rest_seconds),
            }
            .insert(db)
            .await?;
            inserted.push(model);
        }

        Ok(inserted)
    }
}
