use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, Validation, decode};
use util::state::AppState;

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiError;

/// Extracts and verifies the JWT from the `Authorization: Bearer` header.
///
/// # Errors
/// - `401 Unauthorized` if the header is missing or malformed, or if the token is invalid or expired.
impl FromRequestParts<AppState> for Claims {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::unauthorized("Missing or invalid Authorization header"))?;

        decode_claims(bearer.token(), state)
            .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))
    }
}

/// Reads the [`AuthUser`] a guard placed in the request extensions.
///
/// Only usable on routes behind one of the guards in [`crate::auth::guards`].
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

pub fn decode_claims(token: &str, state: &AppState) -> Option<Claims> {
    decode::<Claims>(token, state.decoding_key(), &Validation::new(Algorithm::HS256))
        .ok()
        .map(|data| data.claims)
}
