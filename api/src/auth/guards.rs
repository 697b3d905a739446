//! Route-group access guards.
//!
//! Each guard authenticates the bearer token, loads the user to read their
//! current role, inserts an [`AuthUser`] into the request extensions and then
//! checks the role against the group's allow-list.
//!
//! ```ignore
//! Router::new()
//!     .nest("/subscriptions", subscriptions_routes())
//!     .route_layer(from_fn_with_state(app_state.clone(), allow_student));
//! ```

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use db::models::user::{self, Role};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiError;

async fn authenticate(state: &AppState, req: Request<Body>) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let claims = Claims::from_request_parts(&mut parts, state).await?;

    let found = user::Entity::find_by_id(claims.sub)
        .one(state.db())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %claims.sub, "failed to load user for auth");
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    let auth_user = AuthUser {
        id: found.id,
        role: found.role,
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user);
    Ok((req, auth_user))
}

fn require(user: &AuthUser, allowed: &[Role], failure_msg: &str) -> Result<(), ApiError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::forbidden(failure_msg))
    }
}

/// Any authenticated user.
pub async fn allow_authenticated(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, _user) = authenticate(&state, req).await?;
    Ok(next.run(req).await)
}

/// Reads are open to any authenticated user; writes need a trainer or an admin.
pub async fn allow_trainer_writes(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, user) = authenticate(&state, req).await?;

    if req.method() != Method::GET && req.method() != Method::HEAD {
        require(&user, &[Role::Personal, Role::Admin], "Trainer or admin access required")?;
    }

    Ok(next.run(req).await)
}

/// Student-only guard.
pub async fn allow_student(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, user) = authenticate(&state, req).await?;
    require(&user, &[Role::Student], "Student access required")?;
    Ok(next.run(req).await)
}
