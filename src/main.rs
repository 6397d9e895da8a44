use tracing_subscriber::EnvFilter;

use sapu::{api, config, db};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::ServiceConfig::from_env();

    // Create the database file and schema up front; request handlers only
    // open connections and insert.
    if let Some(dir) = config.database_path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::error!("Failed to create database directory: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = db::open_database(&config.database_path) {
        tracing::error!("Failed to initialize database: {e}");
        std::process::exit(1);
    }

    if let Err(e) = api::serve(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
