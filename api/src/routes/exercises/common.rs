use db::models::exercise::Model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub created_by: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for ExerciseResponse {
    fn from(e: Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            muscle_group: e.muscle_group,
            equipment: e.equipment,
            created_by: e.created_by,
            created_at: e.created_at.to_rfc3339(),
            updated_at: e.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListExercisesQuery {
    pub muscle_group: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub muscle_group: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub equipment: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub muscle_group: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub equipment: Option<String>,
}
