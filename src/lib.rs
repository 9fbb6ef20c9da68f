pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod infra;
pub mod pagination;

use config::Config;
use error::AppError;
use infra::init_db;

/// Open the database and serve the HTTP API.
pub async fn run(config: Config) -> Result<(), AppError> {
    log::info!("DB path: {:?}", config.db_path);
    let pool = init_db(&config.db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;
    http::serve(&config, pool).await
}
