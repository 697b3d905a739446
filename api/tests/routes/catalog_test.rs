#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;

    use crate::helpers::{create_user, make_test_app, send};

    #[tokio::test]
    async fn test_exercise_crud_and_ownership() {
        let (app, app_state) = make_test_app().await;
        let (owner, owner_token) = create_user(&app_state, "Olga", Role::Personal).await;
        let (_, rival_token) = create_user(&app_state, "Rui", Role::Personal).await;
        let (_, admin_token) = create_user(&app_state, "Root", Role::Admin).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/exercises",
            Some(&owner_token),
            Some(json!({ "name": "Squat", "muscle_group": "Legs", "equipment": "Barbell" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["exercise"]["created_by"], owner.id.to_string());
        let uri = format!("/api/exercises/{}", json["exercise"]["id"].as_str().unwrap());

        let (status, _) = send(
            &app,
            "PUT",
            &uri,
            Some(&rival_token),
            Some(json!({ "name": "Front squat" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, json) = send(
            &app,
            "PUT",
            &uri,
            Some(&admin_token),
            Some(json!({ "name": "Front squat" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["exercise"]["name"], "Front squat");

        let (status, _) = send(&app, "DELETE", &uri, Some(&owner_token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", &uri, Some(&owner_token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_exercise_filter_by_muscle_group() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Olga", Role::Personal).await;

        for (name, group) in [("Squat", "Legs"), ("Lunge", "legs"), ("Bench", "Chest")] {
            send(
                &app,
                "POST",
                "/api/exercises",
                Some(&token),
                Some(json!({ "name": name, "muscle_group": group })),
            )
            .await;
        }

        let (status, json) = send(&app, "GET", "/api/exercises?muscle_group=LEGS", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["exercises"].as_array().unwrap().len(), 2);
    }

    /// Test Case: Nested exercise lines are validated with their index
    #[tokio::test]
    async fn test_workout_validation_reports_line() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Olga", Role::Personal).await;

        let (_, exercise) = send(
            &app,
            "POST",
            "/api/exercises",
            Some(&token),
            Some(json!({ "name": "Squat" })),
        )
        .await;
        let exercise_id = exercise["exercise"]["id"].clone();

        let (status, json) = send(
            &app,
            "POST",
            "/api/workouts",
            Some(&token),
            Some(json!({
                "name": "Leg day",
                "exercises": [
                    { "exercise_id": exercise_id, "sets": 3, "reps": 10 },
                    { "exercise_id": exercise_id, "sets": 0, "reps": 10 }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with("exercises[1].sets: must be between 1"),
            "{json}"
        );
    }

    /// Test Case: Templates are shared, private workouts are not
    #[tokio::test]
    async fn test_workout_visibility_and_exercises() {
        let (app, app_state) = make_test_app().await;
        let (_, owner_token) = create_user(&app_state, "Olga", Role::Personal).await;
        let (_, student_token) = create_user(&app_state, "Sara", Role::Student).await;

        let (_, exercise) = send(
            &app,
            "POST",
            "/api/exercises",
            Some(&owner_token),
            Some(json!({ "name": "Squat" })),
        )
        .await;
        let exercise_id = exercise["exercise"]["id"].clone();

        let (status, template) = send(
            &app,
            "POST",
            "/api/workouts",
            Some(&owner_token),
            Some(json!({
                "name": "Leg day",
                "is_template": true,
                "exercises": [{ "exercise_id": exercise_id, "sets": 4, "reps": 8, "rest_seconds": 90 }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(template["workout"]["exercises"][0]["position"], 0);

        let (_, private) = send(
            &app,
            "POST",
            "/api/workouts",
            Some(&owner_token),
            Some(json!({ "name": "Draft" })),
        )
        .await;

        let (_, json) = send(&app, "GET", "/api/workouts", Some(&student_token), None).await;
        let names: Vec<&str> = json["workouts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Leg day"]);

        let private_uri = format!("/api/workouts/{}", private["workout"]["id"].as_str().unwrap());
        let (status, _) = send(&app, "GET", &private_uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(
            &app,
            "PUT",
            &format!("{private_uri}/exercises"),
            Some(&owner_token),
            Some(json!({
                "exercises": [
                    { "exercise_id": exercise_id, "sets": 3, "reps": 12 },
                    { "exercise_id": exercise_id, "sets": 2, "reps": 15, "rest_seconds": 30 }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let lines = json["workout"]["exercises"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["position"], 1);
        assert_eq!(lines[1]["reps"], 15);
    }

    #[tokio::test]
    async fn test_workout_with_unknown_exercise() {
        let (app, app_state) = make_test_app().await;
        let (_, token) = create_user(&app_state, "Olga", Role::Personal).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/workouts",
            Some(&token),
            Some(json!({
                "name": "Ghost",
                "exercises": [{ "exercise_id": uuid::Uuid::new_v4(), "sets": 3, "reps": 10 }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
