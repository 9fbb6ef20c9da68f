//! Runtime configuration from the environment (and `.env`).

use crate::error::AppError;
use crate::pagination::DEFAULT_PER_PAGE;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub per_page: u32,
}

fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("postboard").join("app.db")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            db_path: default_db_path(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("POSTBOARD_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("POSTBOARD_PORT") {
            config.port = port.parse().map_err(|_| {
                AppError::Validation(format!("POSTBOARD_PORT must be a port number, got {}", port))
            })?;
        }
        if let Some(path) = lookup("POSTBOARD_DB") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(per_page) = lookup("POSTBOARD_PER_PAGE") {
            config.per_page = per_page.parse().map_err(|_| {
                AppError::Validation(format!(
                    "POSTBOARD_PER_PAGE must be a number, got {}",
                    per_page
                ))
            })?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
