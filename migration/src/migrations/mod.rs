pub mod m202610010001_create_users;
pub mod m202610010002_create_refresh_tokens;
pub mod m202610010003_create_password_reset_tokens;
pub mod m202610010004_create_exercises;
pub mod m202610010005_create_workouts;
pub mod m202610010006_create_schedulings;
pub mod m202610010007_create_plans;
