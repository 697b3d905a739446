use migration::runner;
use std::{fs, path::Path, process};
use util::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    let db_path = config.database_path.clone();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            migrate(&config).await;
        }
        _ => {
            migrate(&config).await;
        }
    }
}

async fn migrate(config: &AppConfig) {
    create_db_dir(&config.database_path);

    let db = match sea_orm::Database::connect(config.database_url()).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("DB connection failed: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = runner::run_pending_migrations(&db).await {
        eprintln!("Migration failed: {e}");
        process::exit(1);
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => {
            eprintln!("Failed to delete {}: {e}", db_path.display());
            process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if path.starts_with("sqlite:") {
        return;
    }
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory: {e}");
            process::exit(1);
        }
    }
}
