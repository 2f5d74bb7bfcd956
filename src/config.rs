use std::path::PathBuf;

use crate::utils::error::AppError;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:8000,http://localhost:5432";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Replaces the bundled dataset when set
    pub users_data_path: Option<PathBuf>,
    /// Upper bound of the artificial response delay; 0 disables it
    pub max_response_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 50000)?;
        let max_response_delay_ms = parse_or("MAX_RESPONSE_DELAY_MS", lookup("MAX_RESPONSE_DELAY_MS"), 5000)?;

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let users_data_path = lookup("USERS_DATA_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            allowed_origins,
            users_data_path,
            max_response_delay_ms,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, AppError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", key, raw))),
        None => Ok(default),
    }
}
