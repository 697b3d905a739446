pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use db::models::user::Role;
use jsonwebtoken::{Header, encode};
use util::state::AppState;
use uuid::Uuid;

/// Generates a JWT and its expiry timestamp (RFC 3339) for a given user.
///
/// The role is embedded for clients; the guards always re-read it from the database.
pub fn generate_jwt(
    state: &AppState,
    user_id: Uuid,
    role: Role,
) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let expiry = Utc::now() + Duration::minutes(state.config().jwt_duration_minutes);

    let claims = Claims {
        sub: user_id,
        role,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(&Header::default(), &claims, state.encoding_key())?;
    Ok((token, expiry.to_rfc3339()))
}
