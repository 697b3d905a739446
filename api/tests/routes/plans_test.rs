#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;

    use crate::helpers::{create_user, make_test_app, send};

    async fn create_plan(app: &axum::Router, token: &str) -> String {
        let (status, json) = send(
            app,
            "POST",
            "/api/plans",
            Some(token),
            Some(json!({ "name": "Monthly", "price_cents": 9900, "duration_days": 30 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        assert_eq!(json["plan"]["active"], true);
        json["plan"]["id"].as_str().unwrap().to_string()
    }

    /// Test Case: Subscribe once, second attempt conflicts, cancel, list
    #[tokio::test]
    async fn test_subscription_flow() {
        let (app, app_state) = make_test_app().await;
        let (_, trainer_token) = create_user(&app_state, "Tiago", Role::Personal).await;
        let (_, student_token) = create_user(&app_state, "Sara", Role::Student).await;
        let plan_id = create_plan(&app, &trainer_token).await;
        let subscribe_uri = format!("/api/plans/{plan_id}/subscribe");

        let (status, json) = send(&app, "POST", &subscribe_uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["subscription"]["status"], "ACTIVE");
        let subscription_id = json["subscription"]["id"].as_str().unwrap().to_string();

        let (status, json) = send(&app, "POST", &subscribe_uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Already subscribed to this plan");

        let (status, json) = send(&app, "GET", "/api/subscriptions", Some(&student_token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["subscriptions"].as_array().unwrap().len(), 1);

        let cancel_uri = format!("/api/subscriptions/{subscription_id}");
        let (status, json) = send(&app, "DELETE", &cancel_uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["subscription"]["status"], "CANCELED");

        let (status, _) = send(&app, "DELETE", &cancel_uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_trainers_cannot_subscribe() {
        let (app, app_state) = make_test_app().await;
        let (_, trainer_token) = create_user(&app_state, "Tiago", Role::Personal).await;
        let plan_id = create_plan(&app, &trainer_token).await;

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/plans/{plan_id}/subscribe"),
            Some(&trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_inactive_plan_is_hidden_and_closed() {
        let (app, app_state) = make_test_app().await;
        let (_, trainer_token) = create_user(&app_state, "Tiago", Role::Personal).await;
        let (_, student_token) = create_user(&app_state, "Sara", Role::Student).await;
        let plan_id = create_plan(&app, &trainer_token).await;

        let (status, json) = send(
            &app,
            "PUT",
            &format!("/api/plans/{plan_id}"),
            Some(&trainer_token),
            Some(json!({ "active": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["plan"]["active"], false);

        let (_, json) = send(&app, "GET", "/api/plans", Some(&student_token), None).await;
        assert!(json["plans"].as_array().unwrap().is_empty());

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/plans/{plan_id}/subscribe"),
            Some(&student_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Plan is not accepting subscriptions");
    }

    #[tokio::test]
    async fn test_plan_validation() {
        let (app, app_state) = make_test_app().await;
        let (_, trainer_token) = create_user(&app_state, "Tiago", Role::Personal).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/plans",
            Some(&trainer_token),
            Some(json!({ "name": "Forever", "price_cents": 100, "duration_days": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = json["message"].as_str().unwrap();
        assert!(message.starts_with("duration_days: must be between 1"), "{message}");
    }
}
