use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user;
use serde_json::json;
use services::{
    auth_service,
    user_service::{self, Registration},
};
use util::state::AppState;

use super::common::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, RequestPasswordResetRequest,
    ResetPasswordRequest,
};
use crate::auth::{AuthUser, generate_jwt};
use crate::mail::EmailService;
use crate::response::{ApiError, ApiResult};
use crate::routes::common::ValidatedJson;

async fn issue_session(state: &AppState, user: user::Model, refresh_token: Option<String>) -> ApiResult<AuthResponse> {
    let (token, expires_at) = generate_jwt(state, user.id, user.role).map_err(|e| {
        tracing::error!(error = %e, "failed to sign access token");
        ApiError::internal()
    })?;

    let refresh_token = match refresh_token {
        Some(raw) => raw,
        None => {
            auth_service::issue_refresh_token(
                state.db(),
                user.id,
                state.config().refresh_token_duration_days,
            )
            .await?
        }
    };

    Ok(AuthResponse {
        user: user.into(),
        token,
        expires_at,
        refresh_token,
    })
}

/// POST /api/auth/register
///
/// Register a new student or trainer account and sign it in.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ana Souza",
///   "email": "ana@gym.test",
///   "password": "strongpassword",
///   "role": "PERSONAL"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "user": { "id": "…", "name": "Ana Souza", "email": "ana@gym.test", "role": "PERSONAL", … },
///   "token": "jwt_token_here",
///   "expires_at": "2026-10-16T11:00:00+00:00",
///   "refresh_token": "opaque_refresh_token"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure or unknown role)
/// - `409 Conflict` (email already registered)
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = user_service::register(
        state.db(),
        Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role.into(),
        },
    )
    .await?;

    let session = issue_session(&state, created, None).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/auth/login
///
/// ### Request Body
/// ```json
/// { "email": "ana@gym.test", "password": "strongpassword" }
/// ```
///
/// ### Responses
/// - `200 OK` → same body as register
/// - `401 Unauthorized`
/// ```json
/// { "error": "Unauthorized", "message": "Invalid email or password" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let found = auth_service::login(state.db(), &req.email, &req.password).await?;
    let session = issue_session(&state, found, None).await?;
    Ok(Json(session))
}

/// POST /api/auth/refresh
///
/// Exchanges a refresh token for a new access token and a new refresh token.
/// The presented refresh token stops working.
///
/// ### Responses
/// - `200 OK` → same body as login
/// - `401 Unauthorized` (unknown, revoked or expired refresh token)
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<impl IntoResponse> {
    let (owner, fresh) = auth_service::rotate_refresh_token(
        state.db(),
        &req.refresh_token,
        state.config().refresh_token_duration_days,
    )
    .await?;

    let session = issue_session(&state, owner, Some(fresh)).await?;
    Ok(Json(session))
}

/// POST /api/auth/logout
///
/// Revokes the given refresh token. The access token stays valid until it expires.
///
/// ### Responses
/// - `200 OK` → `{ "message": "Logged out successfully" }`
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<impl IntoResponse> {
    auth_service::logout(state.db(), user.actor(), &req.refresh_token).await?;
    Ok(Json(json!({ "message": "Logged out successfully" })))
}

/// POST /api/auth/request-password-reset
///
/// Mails a reset link to the account, at most `MAX_PASSWORD_RESET_REQUESTS_PER_HOUR` times an
/// hour. Always answers `200 OK` so the endpoint cannot be used to discover accounts.
///
/// ### Request Body
/// ```json
/// { "email": "ana@gym.test" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "message": "If the account exists, a password reset link has been sent" }
/// ```
pub async fn request_password_reset(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RequestPasswordResetRequest>,
) -> ApiResult<impl IntoResponse> {
    let config = state.config();
    let issued = auth_service::request_password_reset(
        state.db(),
        &req.email,
        config.reset_token_expiry_minutes,
        config.max_password_reset_requests_per_hour,
    )
    .await?;

    if let Some(issued) = issued {
        if !config.mail_enabled() {
            tracing::warn!(user_id = %issued.user.id, "mail is not configured, reset email not sent");
        } else if let Err(e) =
            EmailService::send_password_reset_email(config, &issued.user.email, &issued.token.token).await
        {
            tracing::error!(user_id = %issued.user.id, error = %e, "failed to send password reset email");
        }
    }

    Ok(Json(json!({
        "message": "If the account exists, a password reset link has been sent"
    })))
}

/// POST /api/auth/reset-password
///
/// ### Request Body
/// ```json
/// { "token": "reset_token", "password": "new-password" }
/// ```
///
/// ### Responses
/// - `200 OK` → `{ "message": "Password has been reset successfully" }`
/// - `400 Bad Request` (invalid, used or expired token)
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    auth_service::reset_password(state.db(), &req.token, &req.password).await?;
    Ok(Json(json!({ "message": "Password has been reset successfully" })))
}
