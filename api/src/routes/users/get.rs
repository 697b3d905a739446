use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use services::user_service;
use util::state::AppState;
use uuid::Uuid;

use super::common::{ListUsersQuery, UserResponse};
use crate::response::ApiResult;
use crate::routes::common::{ApiPath, ApiQuery};

/// GET /api/users
///
/// Lists users ordered by name, optionally filtered by role.
///
/// ### Query Parameters
/// - `role` (optional): `STUDENT`, `PERSONAL` or `ADMIN`
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "users": [ { "id": "…", "name": "Ana", "email": "ana@gym.test", "role": "PERSONAL", "phone": null, "created_at": "…", "updated_at": "…" } ] }
/// ```
/// - `400 Bad Request` (unknown role)
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListUsersQuery>,
) -> ApiResult<impl IntoResponse> {
    let users = user_service::list(state.db(), query.role).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(json!({ "users": users })))
}

/// GET /api/users/{user_id}
///
/// ### Responses
/// - `200 OK` → `{ "user": { … } }`
/// - `404 Not Found`
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let user = user_service::get(state.db(), user_id).await?;
    Ok(Json(json!({ "user": UserResponse::from(user) })))
}
