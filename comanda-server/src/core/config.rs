use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every knob can be set through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | COMANDA_HOST | 0.0.0.0 | Bind address |
/// | COMANDA_PORT | 3000 | HTTP port |
/// | COMANDA_DATA_DIR | ./data | Directory holding the database file |
/// | COMANDA_LOG_LEVEL | info | Log level (trace/debug/info/warn/error) |
/// | COMANDA_LOG_DIR | (unset) | Daily-rolling log files; stdout when unset |
/// | ENVIRONMENT | development | development \| production |
///
/// # Example
///
/// ```ignore
/// COMANDA_DATA_DIR=/var/lib/comanda COMANDA_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address for the HTTP listener
    pub host: String,
    /// HTTP API port
    pub port: u16,
    /// Directory for persistent data; the redb file lives inside it
    pub data_dir: String,
    /// Log filter level
    pub log_level: String,
    /// Log file directory; `None` logs to stdout only
    pub log_dir: Option<String>,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("COMANDA_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("COMANDA_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("COMANDA_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("COMANDA_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("COMANDA_LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the data directory and port
    ///
    /// Used by tests that need an isolated store and a free port.
    pub fn with_overrides(data_dir: impl Into<String>, port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.port = port;
        config
    }

    /// Full path of the database file
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("comanda.redb")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
