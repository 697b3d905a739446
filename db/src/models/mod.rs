pub mod exercise;
pub mod password_reset_token;
pub mod plan;
pub mod refresh_token;
pub mod scheduling;
pub mod scheduling_history;
pub mod subscription;
pub mod user;
pub mod workout;
pub mod workout_exercise;

pub use exercise::Entity as Exercise;
pub use password_reset_token::Entity as PasswordResetToken;
pub use plan::Entity as Plan;
pub use refresh_token::Entity as RefreshToken;
pub use scheduling::Entity as Scheduling;
pub use scheduling_history::Entity as SchedulingHistory;
pub use subscription::Entity as Subscription;
pub use user::Entity as User;
pub use workout::Entity as Workout;
pub use workout_exercise::Entity as WorkoutExercise;
