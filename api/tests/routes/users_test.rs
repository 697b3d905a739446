#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use uuid::Uuid;

    use crate::helpers::{create_user, make_test_app, send};

    #[tokio::test]
    async fn test_list_users_filters_by_role() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Personal).await;
        create_user(&app_state, "Bia", Role::Student).await;
        create_user(&app_state, "Caio", Role::Student).await;

        let (status, json) = send(&app, "GET", "/api/users?role=STUDENT", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let users = json["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["name"], "Bia");
        assert_eq!(users[1]["name"], "Caio");

        let (status, json) = send(&app, "GET", "/api/users", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["users"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_users_unknown_role_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Personal).await;

        let (status, json) = send(&app, "GET", "/api/users?role=COACH", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Student).await;
        let (trainer, _) = create_user(&app_state, "Tito", Role::Personal).await;

        let uri = format!("/api/users/{}", trainer.id);
        let (status, json) = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["user"]["role"], "PERSONAL");

        let uri = format!("/api/users/{}", Uuid::new_v4());
        let (status, json) = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_get_user_malformed_id() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Student).await;

        let (status, _) = send(&app, "GET", "/api/users/not-a-uuid", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// Test Case: Changing the password through the profile
    #[tokio::test]
    async fn test_update_me_changes_profile_and_password() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Student).await;

        let (status, json) = send(
            &app,
            "PUT",
            "/api/users/me",
            Some(&token),
            Some(json!({ "name": "Ana Lima", "phone": "+55 11 90000-0000", "password": "new-password-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["user"]["name"], "Ana Lima");
        assert_eq!(json["user"]["phone"], "+55 11 90000-0000");

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "ana@gym.test", "password": "new-password-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_me_short_password() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Ana", Role::Student).await;

        let (status, json) = send(
            &app,
            "PUT",
            "/api/users/me",
            Some(&token),
            Some(json!({ "password": "short" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "password: Password must be between 8 and 128 characters");
    }
}
