#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::user::{self, Role};
    use sea_orm::{EntityTrait, ModelTrait};
    use serde_json::json;

    use crate::helpers::{create_user, make_test_app, send};

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (app, _) = make_test_app().await;
        let (status, json) = send(&app, "GET", "/api/schedulings", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Unauthorized");
        assert_eq!(json["message"], "Missing or invalid Authorization header");
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let (app, _) = make_test_app().await;
        let (status, json) = send(&app, "GET", "/api/users", Some("not.a.jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid or expired token");
    }

    /// Test Case: A valid token for a deleted user
    #[tokio::test]
    async fn test_token_of_deleted_user_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        let (gone, token) = create_user(&app_state, "Gone", Role::Student).await;
        let found = user::Entity::find_by_id(gone.id)
            .one(app_state.db())
            .await
            .unwrap()
            .unwrap();
        found.delete(app_state.db()).await.unwrap();

        let (status, json) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "User no longer exists");
    }

    #[tokio::test]
    async fn test_students_can_read_but_not_write_catalog() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Stu", Role::Student).await;

        let (status, _) = send(&app, "GET", "/api/exercises", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(
            &app,
            "POST",
            "/api/exercises",
            Some(&token),
            Some(json!({ "name": "Squat" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"], "Forbidden");
        assert_eq!(json["message"], "Trainer or admin access required");
    }

    #[tokio::test]
    async fn test_subscriptions_are_student_only() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Tina", Role::Personal).await;

        let (status, json) = send(&app, "GET", "/api/subscriptions", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Student access required");
    }
}
