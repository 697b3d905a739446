use db::models::{workout, workout_exercise};
use serde::{Deserialize, Serialize};
use services::workout_service::WorkoutDetail;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub personal_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_template: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<workout::Model> for WorkoutResponse {
    fn from(w: workout::Model) -> Self {
        Self {
            id: w.id,
            personal_id: w.personal_id,
            name: w.name,
            description: w.description,
            is_template: w.is_template,
            created_at: w.created_at.to_rfc3339(),
            updated_at: w.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkoutExerciseResponse {
    pub exercise_id: Uuid,
    pub position: i32,
    pub sets: i32,
    pub reps: i32,
    pub rest_seconds: Option<i32>,
}

impl From<workout_exercise::Model> for WorkoutExerciseResponse {
    fn from(line: workout_exercise::Model) -> Self {
        Self {
            exercise_id: line.exercise_id,
            position: line.position,
            sets: line.sets,
            reps: line.reps,
            rest_seconds: line.rest_seconds,
        }
    }
}

/// A workout with its exercise lines inlined.
#[derive(Debug, Serialize)]
pub struct WorkoutDetailResponse {
    #[serde(flatten)]
    pub workout: WorkoutResponse,
    pub exercises: Vec<WorkoutExerciseResponse>,
}

impl From<WorkoutDetail> for WorkoutDetailResponse {
    fn from(detail: WorkoutDetail) -> Self {
        Self {
            workout: detail.workout.into(),
            exercises: detail.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutExerciseRequest {
    pub exercise_id: Uuid,
    #[validate(range(min = 1, max = 20))]
    pub sets: i32,
    #[validate(range(min = 1, max = 100))]
    pub reps: i32,
    #[validate(range(min = 0, max = 600))]
    pub rest_seconds: Option<i32>,
}

impl From<WorkoutExerciseRequest> for workout_exercise::Line {
    fn from(req: WorkoutExerciseRequest) -> Self {
        Self {
            exercise_id: req.exercise_id,
            sets: req.sets,
            reps: req.reps,
            rest_seconds: req.rest_seconds,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<WorkoutExerciseRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub is_template: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceExercisesRequest {
    #[validate(nested)]
    pub exercises: Vec<WorkoutExerciseRequest>,
}
