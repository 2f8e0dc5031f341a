use std::env;

/// Default maximum JSON body size in bytes
pub const DEFAULT_JSON_BODY_LIMIT: usize = 16 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Maximum accepted JSON body size in bytes
    pub json_body_limit: usize,
    pub cors: CorsConfig,
}

/// Cross-origin policy for the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin may call the API
    AnyOrigin,
    /// Only the listed origins may call the API
    Origins(Vec<String>),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            json_body_limit: env::var("JSON_BODY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JSON_BODY_LIMIT),
            cors: CorsConfig::from_env(),
        })
    }
}

impl CorsConfig {
    /// Load the CORS policy from `CORS_ALLOWED_ORIGINS`
    pub fn from_env() -> Self {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => Self::parse(&value),
            Err(_) => CorsConfig::AnyOrigin,
        }
    }

    /// Parses a comma separated origin list; empty or `*` allows any origin
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsConfig::AnyOrigin
        } else {
            CorsConfig::Origins(origins)
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "PORT must be a valid number"),
        }
    }
}

impl std::error::Error for ConfigError {}
