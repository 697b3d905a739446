#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Utc;
    use db::models::password_reset_token;
    use db::models::user::Role;
    use serde_json::json;

    use crate::helpers::{create_user, make_test_app, send};

    /// Test Case: Register then use the returned token
    #[tokio::test]
    async fn test_register_returns_session() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Ana Souza",
                "email": "Ana@Gym.Test",
                "password": "strongpassword",
                "role": "PERSONAL"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["user"]["email"], "ana@gym.test");
        assert_eq!(json["user"]["role"], "PERSONAL");
        assert!(json["user"].get("password_hash").is_none());
        assert!(json["expires_at"].as_str().is_some());
        assert!(!json["refresh_token"].as_str().unwrap().is_empty());

        let token = json["token"].as_str().unwrap();
        let (status, me) = send(&app, "GET", "/api/auth/me", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["user"]["name"], "Ana Souza");
    }

    /// Test Case: Self-registration cannot grant ADMIN
    #[tokio::test]
    async fn test_register_rejects_admin_role() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Mallory",
                "email": "mallory@gym.test",
                "password": "strongpassword",
                "role": "ADMIN"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let (app, app_state) = make_test_app().await;
        create_user(&app_state, "Bruno", Role::Student).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Other Bruno",
                "email": "BRUNO@gym.test",
                "password": "strongpassword",
                "role": "STUDENT"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Email is already registered");
    }

    #[tokio::test]
    async fn test_register_validation_message() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Carla",
                "email": "not-an-email",
                "password": "short",
                "role": "STUDENT"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "email: Invalid email format");
    }

    #[tokio::test]
    async fn test_login_success_and_wrong_password() {
        let (app, app_state) = make_test_app().await;
        let (user, _) = create_user(&app_state, "Dani", Role::Student).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "dani@gym.test", "password": "password123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["user"]["id"], user.id.to_string());

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "dani@gym.test", "password": "wrong-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Unauthorized");
        assert_eq!(json["message"], "Invalid email or password");
    }

    /// Test Case: A refresh token works exactly once
    #[tokio::test]
    async fn test_refresh_rotates_token() {
        let (app, app_state) = make_test_app().await;
        create_user(&app_state, "Edu", Role::Personal).await;

        let (_, login) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "edu@gym.test", "password": "password123" })),
        )
        .await;
        let first = login["refresh_token"].as_str().unwrap().to_string();

        let (status, refreshed) = send(
            &app,
            "POST",
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": first })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let second = refreshed["refresh_token"].as_str().unwrap();
        assert_ne!(second, first);
        assert!(refreshed["token"].as_str().is_some());

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": first })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_revokes_refresh_token() {
        let (app, app_state) = make_test_app().await;
        create_user(&app_state, "Fabi", Role::Student).await;

        let (_, login) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "fabi@gym.test", "password": "password123" })),
        )
        .await;
        let token = login["token"].as_str().unwrap();
        let refresh = login["refresh_token"].as_str().unwrap();

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/logout",
            Some(token),
            Some(json!({ "refresh_token": refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Logged out successfully");

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_requires_token() {
        let (app, _) = make_test_app().await;
        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/logout",
            None,
            Some(json!({ "refresh_token": "whatever" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    /// Test Case: Reset request answers the same for unknown emails
    #[tokio::test]
    async fn test_request_password_reset_is_uniform() {
        let (app, app_state) = make_test_app().await;
        create_user(&app_state, "Gabi", Role::Student).await;

        let (known_status, known) = send(
            &app,
            "POST",
            "/api/auth/request-password-reset",
            None,
            Some(json!({ "email": "gabi@gym.test" })),
        )
        .await;
        let (unknown_status, unknown) = send(
            &app,
            "POST",
            "/api/auth/request-password-reset",
            None,
            Some(json!({ "email": "nobody@gym.test" })),
        )
        .await;

        assert_eq!(known_status, StatusCode::OK);
        assert_eq!(unknown_status, StatusCode::OK);
        assert_eq!(known, unknown);
    }

    /// Test Case: Reset tokens are capped per hour and the answer never changes
    #[tokio::test]
    async fn test_request_password_reset_is_rate_limited() {
        let (app, app_state) = make_test_app().await;
        let (user, _) = create_user(&app_state, "Iris", Role::Student).await;
        let limit = app_state.config().max_password_reset_requests_per_hour;

        let mut answers = Vec::new();
        for _ in 0..limit + 2 {
            let (status, json) = send(
                &app,
                "POST",
                "/api/auth/request-password-reset",
                None,
                Some(json!({ "email": "iris@gym.test" })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            answers.push(json);
        }
        assert!(answers.windows(2).all(|pair| pair[0] == pair[1]));

        let since = Utc::now() - chrono::Duration::hours(1);
        let issued = password_reset_token::Model::count_issued_since(app_state.db(), user.id, since)
            .await
            .unwrap();
        assert_eq!(issued, u64::from(limit));
    }

    #[tokio::test]
    async fn test_reset_password_flow() {
        let (app, app_state) = make_test_app().await;
        let (user, _) = create_user(&app_state, "Hugo", Role::Student).await;

        let reset = password_reset_token::Model::create(app_state.db(), user.id, 15)
            .await
            .unwrap();
        assert!(reset.expires_at > Utc::now());

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/reset-password",
            None,
            Some(json!({ "token": reset.token, "password": "brand-new-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Password has been reset successfully");

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "hugo@gym.test", "password": "brand-new-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(
            &app,
            "POST",
            "/api/auth/reset-password",
            None,
            Some(json!({ "token": reset.token, "password": "another-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid or expired reset token");
    }
}
