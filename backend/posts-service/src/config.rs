/// Configuration management for Posts Service
///
/// Values come from environment variables (optionally seeded from a `.env`
/// file by the binary). Everything has a development default.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of actix workers
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins; `*` allows any origin
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("POSTS_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("POSTS_SERVICE_PORT", 5002)?,
                workers: parse_env_or_default("POSTS_SERVICE_WORKERS", 4)?,
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            logging: LoggingConfig {
                format: match std::env::var("LOG_FORMAT") {
                    Ok(value) => parse_log_format(&value)?,
                    Err(_) => LogFormat::Text,
                },
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "plain" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(format!(
            "Failed to parse LOG_FORMAT='{}': expected 'text' or 'json'",
            other
        )),
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "APP_ENV",
        "POSTS_SERVICE_HOST",
        "POSTS_SERVICE_PORT",
        "POSTS_SERVICE_WORKERS",
        "CORS_ALLOWED_ORIGINS",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.bind_address(), "0.0.0.0:5002");
        assert_eq!(config.app.workers, 4);
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        clear_env();
        std::env::set_var("POSTS_SERVICE_HOST", "127.0.0.1");
        std::env::set_var("POSTS_SERVICE_PORT", "8088");
        std::env::set_var("LOG_FORMAT", "JSON");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address(), "127.0.0.1:8088");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("POSTS_SERVICE_PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        clear_env();

        assert!(err.contains("POSTS_SERVICE_PORT"));
    }
}
