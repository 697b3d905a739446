#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{DateTime, Duration, Utc};
    use db::models::user::{Model as UserModel, Role};
    use serde_json::{Value, json};
    use util::state::AppState;

    use crate::helpers::{create_user, make_test_app, send};

    struct TestData {
        trainer: UserModel,
        trainer_token: String,
        student: UserModel,
        student_token: String,
        outsider_token: String,
    }

    async fn setup_test_data(app_state: &AppState) -> TestData {
        let (trainer, trainer_token) = create_user(app_state, "Tiago", Role::Personal).await;
        let (student, student_token) = create_user(app_state, "Sara", Role::Student).await;
        let (_, outsider_token) = create_user(app_state, "Otto", Role::Student).await;

        TestData {
            trainer,
            trainer_token,
            student,
            student_token,
            outsider_token,
        }
    }

    fn booking(data: &TestData, days_ahead: i64) -> Value {
        json!({
            "personal_id": data.trainer.id,
            "student_id": data.student.id,
            "date": (Utc::now() + Duration::days(days_ahead)).to_rfc3339(),
            "type": "IN_PERSON"
        })
    }

    async fn book(app: &axum::Router, data: &TestData) -> String {
        let (status, json) = send(
            app,
            "POST",
            "/api/schedulings",
            Some(&data.trainer_token),
            Some(booking(data, 2)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["scheduling"]["id"].as_str().unwrap().to_string()
    }

    /// Test Case: New sessions start pending and are visible to both participants
    #[tokio::test]
    async fn test_create_scheduling_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let mut body = booking(&data, 3);
        body["status"] = json!("COMPLETED");
        let (status, json) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.student_token),
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let scheduling = &json["scheduling"];
        assert_eq!(scheduling["status"], "PENDING_CONFIRMATION");
        assert_eq!(scheduling["type"], "IN_PERSON");
        assert_eq!(scheduling["personal_id"], data.trainer.id.to_string());
        assert!(scheduling["started_at"].is_null());

        for token in [&data.trainer_token, &data.student_token] {
            let (status, json) = send(&app, "GET", "/api/schedulings", Some(token), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["schedulings"].as_array().unwrap().len(), 1);
        }

        let (_, json) = send(&app, "GET", "/api/schedulings", Some(&data.outsider_token), None).await;
        assert!(json["schedulings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_in_the_past_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.trainer_token),
            Some(booking(&data, -1)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Cannot schedule a session in the past");
    }

    #[tokio::test]
    async fn test_create_with_swapped_roles_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.trainer_token),
            Some(json!({
                "personal_id": data.student.id,
                "student_id": data.trainer.id,
                "date": (Utc::now() + Duration::days(1)).to_rfc3339(),
                "type": "ONLINE"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "personal_id must refer to a personal user");
    }

    #[tokio::test]
    async fn test_create_for_others_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.outsider_token),
            Some(booking(&data, 2)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_type_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let mut body = booking(&data, 2);
        body["type"] = json!("HYBRID");
        let (status, json) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.trainer_token),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_outsider_gets_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;

        let uri = format!("/api/schedulings/{id}");
        let (status, json) = send(&app, "GET", &uri, Some(&data.outsider_token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Scheduling not found");

        let uri = format!("/api/schedulings/{id}/confirm");
        let (status, _) = send(&app, "POST", &uri, Some(&data.outsider_token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// Test Case: pending → scheduled → in progress → completed, with history
    #[tokio::test]
    async fn test_full_lifecycle() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{id}/confirm"),
            Some(&data.student_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scheduling"]["status"], "SCHEDULED");

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{id}/start"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scheduling"]["status"], "IN_PROGRESS");
        assert!(json["scheduling"]["started_at"].as_str().is_some());

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{id}/complete"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scheduling"]["status"], "COMPLETED");
        assert!(json["scheduling"]["completed_at"].as_str().is_some());

        let (status, json) = send(
            &app,
            "GET",
            &format!("/api/schedulings/{id}/history"),
            Some(&data.student_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let statuses: Vec<&str> = json["history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["status"].as_str().unwrap())
            .collect();
        assert_eq!(
            statuses,
            ["PENDING_CONFIRMATION", "SCHEDULED", "IN_PROGRESS", "COMPLETED"]
        );
        assert_eq!(json["history"][1]["changed_by"], "STUDENT");
        assert_eq!(json["history"][1]["user_id"], data.student.id.to_string());
    }

    #[tokio::test]
    async fn test_complete_requires_start() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{id}/complete"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            json["message"],
            "Cannot change status from PENDING_CONFIRMATION to COMPLETED"
        );
    }

    /// Test Case: Cancel keeps the record and refuses a second cancel
    #[tokio::test]
    async fn test_cancel_then_cancel_again() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;
        let uri = format!("/api/schedulings/{id}");

        let (status, json) = send(
            &app,
            "DELETE",
            &uri,
            Some(&data.student_token),
            Some(json!({ "reason": "Feeling sick" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Scheduling canceled successfully");

        let (status, json) = send(&app, "GET", &uri, Some(&data.trainer_token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scheduling"]["status"], "CANCELED");

        let (status, json) = send(
            &app,
            "DELETE",
            &uri,
            Some(&data.student_token),
            Some(json!({ "reason": "Still sick" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Scheduling is already canceled");

        let (_, json) = send(
            &app,
            "GET",
            &format!("{uri}/history"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1]["reason"], "Feeling sick");
    }

    #[tokio::test]
    async fn test_cancel_reason_too_short() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;

        let (status, json) = send(
            &app,
            "DELETE",
            &format!("/api/schedulings/{id}"),
            Some(&data.student_token),
            Some(json!({ "reason": "no" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "reason: Reason must be between 5 and 500 characters");
    }

    #[tokio::test]
    async fn test_update_date_reschedules() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;
        let uri = format!("/api/schedulings/{id}");

        let (status, json) = send(
            &app,
            "PUT",
            &uri,
            Some(&data.trainer_token),
            Some(json!({ "date": (Utc::now() + Duration::days(5)).to_rfc3339() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Scheduling updated successfully");

        let (_, json) = send(&app, "GET", &uri, Some(&data.student_token), None).await;
        assert_eq!(json["scheduling"]["status"], "RESCHEDULED");

        let (status, json) = send(
            &app,
            "PUT",
            &uri,
            Some(&data.trainer_token),
            Some(json!({ "date": (Utc::now() - Duration::days(1)).to_rfc3339() })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "cannot reschedule to the past");
    }

    /// Test Case: A rejected reschedule leaves the stored record as it was
    #[tokio::test]
    async fn test_rejected_past_date_leaves_record_unchanged() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;
        let uri = format!("/api/schedulings/{id}");

        let (_, before) = send(&app, "GET", &uri, Some(&data.trainer_token), None).await;

        let (status, _) = send(
            &app,
            "PUT",
            &uri,
            Some(&data.trainer_token),
            Some(json!({
                "date": (Utc::now() - Duration::days(1)).to_rfc3339(),
                "type": "ONLINE"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, after) = send(&app, "GET", &uri, Some(&data.trainer_token), None).await;
        assert_eq!(after["scheduling"], before["scheduling"]);
        assert_eq!(after["scheduling"]["status"], "PENDING_CONFIRMATION");
        assert_eq!(after["scheduling"]["type"], "IN_PERSON");
    }

    /// Test Case: GET returns what POST stored
    #[tokio::test]
    async fn test_created_scheduling_reads_back_identically() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let date = Utc::now() + Duration::days(4);
        let mut body = booking(&data, 4);
        body["date"] = json!(date.to_rfc3339());
        body["type"] = json!("ONLINE");
        let (status, created) = send(
            &app,
            "POST",
            "/api/schedulings",
            Some(&data.trainer_token),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["scheduling"]["id"].as_str().unwrap();

        let (status, fetched) = send(
            &app,
            "GET",
            &format!("/api/schedulings/{id}"),
            Some(&data.student_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let fetched = &fetched["scheduling"];
        assert_eq!(fetched["id"], id);
        assert_eq!(fetched["type"], "ONLINE");
        let stored = DateTime::parse_from_rfc3339(fetched["date"].as_str().unwrap()).unwrap();
        assert_eq!(stored.timestamp(), date.timestamp());
    }

    #[tokio::test]
    async fn test_cancel_reason_too_long() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;

        let (status, json) = send(
            &app,
            "DELETE",
            &format!("/api/schedulings/{id}"),
            Some(&data.student_token),
            Some(json!({ "reason": "x".repeat(501) })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "reason: Reason must be between 5 and 500 characters");

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/schedulings/{id}"),
            Some(&data.student_token),
            Some(json!({ "reason": "x".repeat(500) })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    /// Test Case: PUT cannot be used to cancel without a reason
    #[tokio::test]
    async fn test_update_to_canceled_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;
        let uri = format!("/api/schedulings/{id}");

        let (status, json) = send(
            &app,
            "PUT",
            &uri,
            Some(&data.trainer_token),
            Some(json!({ "status": "CANCELED" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("DELETE"));

        let (_, json) = send(&app, "GET", &uri, Some(&data.trainer_token), None).await;
        assert_eq!(json["scheduling"]["status"], "PENDING_CONFIRMATION");

        let (_, json) = send(&app, "GET", &format!("{uri}/history"), Some(&data.trainer_token), None).await;
        assert_eq!(json["history"].as_array().unwrap().len(), 1);
    }

    /// Test Case: Two simultaneous cancels produce one success, one conflict, one history row
    #[tokio::test]
    async fn test_concurrent_cancels() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let id = book(&app, &data).await;
        let uri = format!("/api/schedulings/{id}");

        let ((first, _), (second, _)) = tokio::join!(
            send(
                &app,
                "DELETE",
                &uri,
                Some(&data.trainer_token),
                Some(json!({ "reason": "Gym closed" })),
            ),
            send(
                &app,
                "DELETE",
                &uri,
                Some(&data.student_token),
                Some(json!({ "reason": "Feeling sick" })),
            ),
        );

        let mut outcomes = [first, second];
        outcomes.sort();
        assert_eq!(outcomes, [StatusCode::OK, StatusCode::CONFLICT]);

        let (_, json) = send(&app, "GET", &format!("{uri}/history"), Some(&data.trainer_token), None).await;
        let canceled = json["history"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|row| row["status"] == "CANCELED")
            .count();
        assert_eq!(canceled, 1);
    }

    #[tokio::test]
    async fn test_missed_accepts_empty_body_and_notes() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let first = book(&app, &data).await;
        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{first}/missed"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scheduling"]["status"], "MISSED");

        let second = book(&app, &data).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/schedulings/{second}/missed"),
            Some(&data.trainer_token),
            Some(json!({ "notes": "No show" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = send(
            &app,
            "GET",
            &format!("/api/schedulings/{second}/history"),
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(json["history"][1]["notes"], "No show");
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let confirmed = book(&app, &data).await;
        book(&app, &data).await;

        send(
            &app,
            "POST",
            &format!("/api/schedulings/{confirmed}/confirm"),
            Some(&data.student_token),
            None,
        )
        .await;

        let (status, json) = send(
            &app,
            "GET",
            "/api/schedulings?status=SCHEDULED",
            Some(&data.trainer_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let list = json["schedulings"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], confirmed);
    }
}
