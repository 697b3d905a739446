#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use db::models::user::Role;
    use serde_json::json;

    use crate::helpers::{create_user, make_test_app, send};

    #[tokio::test]
    async fn test_scheduling_summary_counts() {
        let (app, app_state) = make_test_app().await;
        let (trainer, trainer_token) = create_user(&app_state, "Tiago", Role::Personal).await;
        let (student, _) = create_user(&app_state, "Sara", Role::Student).await;

        let mut ids = Vec::new();
        for days in [1, 2] {
            let (_, json) = send(
                &app,
                "POST",
                "/api/schedulings",
                Some(&trainer_token),
                Some(json!({
                    "personal_id": trainer.id,
                    "student_id": student.id,
                    "date": (Utc::now() + Duration::days(days)).to_rfc3339(),
                    "type": "ONLINE"
                })),
            )
            .await;
            ids.push(json["scheduling"]["id"].as_str().unwrap().to_string());
        }
        for step in ["start", "complete"] {
            send(
                &app,
                "POST",
                &format!("/api/schedulings/{}/{step}", ids[0]),
                Some(&trainer_token),
                None,
            )
            .await;
        }

        let (status, json) = send(&app, "GET", "/api/analytics/schedulings", Some(&trainer_token), None).await;
        assert_eq!(status, StatusCode::OK);
        let summary = &json["summary"];
        assert_eq!(summary["total"], 2);
        assert_eq!(summary["by_status"]["COMPLETED"], 1);
        assert_eq!(summary["by_status"]["PENDING_CONFIRMATION"], 1);
        assert_eq!(summary["by_status"]["MISSED"], 0);
        assert_eq!(summary["completed_last_30_days"], 1);
        assert_eq!(summary["upcoming"], 1);
    }

    #[tokio::test]
    async fn test_summary_requires_auth() {
        let (app, _) = make_test_app().await;
        let (status, _) = send(&app, "GET", "/api/analytics/schedulings", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
