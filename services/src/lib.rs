pub mod analytics_service;
pub mod auth_service;
pub mod error;
pub mod exercise_service;
pub mod plan_service;
pub mod scheduling_service;
pub mod user_service;
pub mod workout_service;


use db::models::user::Role;
use uuid::Uuid;

pub use error::{AppError, AppResult};

/// The authenticated user a service call is made on behalf of.
///
/// `role` is the role read from the database when the request was authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Owners and admins may modify a resource.
    pub fn can_modify(&self, owner_id: Uuid) -> bool {
        self.is_admin() || self.id == owner_id
    }
}
