use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::user_service::{self, ProfileUpdate};
use util::state::AppState;

use super::common::{UpdateMeRequest, UserResponse};
use crate::auth::AuthUser;
use crate::response::ApiResult;
use crate::routes::common::ValidatedJson;

/// PUT /api/users/me
///
/// Updates the caller's own profile. Changing the password revokes all refresh tokens.
///
/// ### Request Body
/// ```json
/// { "name": "Ana Souza", "phone": "+55 11 99999-0000", "password": "new-password" }
/// ```
/// Every field is optional.
///
/// ### Responses
/// - `200 OK` → `{ "user": { … } }`
/// - `400 Bad Request` (validation failure)
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateMeRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated = user_service::update_profile(
        state.db(),
        user.actor(),
        ProfileUpdate {
            name: req.name,
            phone: req.phone,
            password: req.password,
        },
    )
    .await?;

    Ok(Json(json!({ "user": UserResponse::from(updated) })))
}
