use db::models::user::Role;
use serde::{Deserialize, Serialize};
use services::Actor;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub role: Role,
}

/// The authenticated caller, inserted into request extensions by the guards.
///
/// `role` comes from the database at request time, not from the token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}
