//! Application configuration.
//!
//! `AppConfig` is built once at process start (see `api/src/main.rs`) and then
//! carried inside [`AppState`](crate::state::AppState). Nothing below the
//! binaries reads the environment directly.

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} must be a valid number, got '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: i64,
    pub refresh_token_duration_days: i64,
    pub reset_token_expiry_minutes: i64,
    pub max_password_reset_requests_per_hour: u32,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub gmail_username: String,
    pub gmail_app_password: String,
    pub frontend_url: String,
    pub email_from_name: String,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// `JWT_SECRET` is the only variable without a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "gymflow".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/gymflow.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_var("PORT", 3000)?,
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            jwt_duration_minutes: parse_var("JWT_DURATION_MINUTES", 60)?,
            refresh_token_duration_days: parse_var("REFRESH_TOKEN_DURATION_DAYS", 30)?,
            reset_token_expiry_minutes: parse_var("RESET_TOKEN_EXPIRY_MINUTES", 15)?,
            max_password_reset_requests_per_hour: parse_var("MAX_PASSWORD_RESET_REQUESTS_PER_HOUR", 3)?,
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".into()),
            smtp_port: parse_var("SMTP_PORT", 587)?,
            gmail_username: env::var("GMAIL_USERNAME").unwrap_or_default(),
            gmail_app_password: env::var("GMAIL_APP_PASSWORD").unwrap_or_default(),
            frontend_url: env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".into()),
            email_from_name: env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| "GymFlow".into()),
        })
    }

    /// Fixed configuration used by the test suites.
    pub fn for_tests() -> Self {
        Self {
            env: "test".into(),
            project_name: "gymflow-test".into(),
            log_level: "api=debug".into(),
            log_file: "test.log".into(),
            log_to_stdout: false,
            database_path: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "test-secret-do-not-use".into(),
            jwt_duration_minutes: 60,
            refresh_token_duration_days: 30,
            reset_token_expiry_minutes: 15,
            max_password_reset_requests_per_hour: 3,
            smtp_host: "localhost".into(),
            smtp_port: 2525,
            gmail_username: String::new(),
            gmail_app_password: String::new(),
            frontend_url: "http://localhost:5173".into(),
            email_from_name: "GymFlow".into(),
        }
    }

    /// Outgoing mail needs both SMTP credentials.
    pub fn mail_enabled(&self) -> bool {
        !self.gmail_username.is_empty() && !self.gmail_app_password.is_empty()
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    /// Database URL for SeaORM. Plain file paths are turned into a SQLite DSN.
    pub fn database_url(&self) -> String {
        let path = &self.database_path;
        if path.starts_with("sqlite:") || path.starts_with("postgres://") {
            path.clone()
        } else {
            format!("sqlite://{path}?mode=rwc")
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
