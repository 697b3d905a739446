pub mod models;
pub mod test_utils;

use std::path::Path;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use util::config::AppConfig;

/// Opens the application database described by `config`.
///
/// Plain file paths get their parent directory created first; SQLite will not do it.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    if !config.database_path.starts_with("sqlite:") {
        if let Some(parent) = Path::new(&config.database_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DbErr::Custom(format!("cannot create {}: {e}", parent.display())))?;
        }
    }

    let mut options = ConnectOptions::new(config.database_url());
    options.sqlx_logging(false);

    Database::connect(options).await
}
