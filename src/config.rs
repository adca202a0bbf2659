//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_MAX_CHECKINS_PER_REQUEST: usize = 5000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Optional JSON file replacing the built-in date idea catalog
    pub date_ideas_path: Option<PathBuf>,
    /// Upper bound on check-in rows accepted in one request
    pub max_checkins_per_request: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
            date_ideas_path: None,
            max_checkins_per_request: DEFAULT_MAX_CHECKINS_PER_REQUEST,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            date_ideas_path: env::var("DATE_IDEAS_PATH")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            max_checkins_per_request: parse_var(
                "MAX_CHECKINS_PER_REQUEST",
                DEFAULT_MAX_CHECKINS_PER_REQUEST,
            )?,
        })
    }
}

/// Read and parse an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
