//! Server configuration for the intake REST API.
//!
//! Configuration can come from command line arguments, environment
//! variables, or be built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INTAKE_SERVER_PORT` | 3000 | Server port |
//! | `INTAKE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `INTAKE_LOG_LEVEL` | info | Log level |
//! | `INTAKE_DATABASE_URL` | clinic.db | SQLite database path |
//! | `INTAKE_POOL_SIZE` | 10 | Connection pool capacity |
//! | `INTAKE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `INTAKE_ENABLE_CORS` | true | Enable CORS |
//! | `INTAKE_CORS_ORIGINS` | * | Allowed origins |

use clap::Parser;

/// Server configuration for the intake REST API.
///
/// Construct from the environment with [`ServerConfig::from_env`], from
/// command line arguments with `ServerConfig::parse`, or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "intake-server")]
#[command(about = "Clinic patient intake API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "INTAKE_SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "INTAKE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "INTAKE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// SQLite database path, or :memory: for an ephemeral store.
    #[arg(long, env = "INTAKE_DATABASE_URL", default_value = "clinic.db")]
    pub database_url: String,

    /// Connection pool capacity. Callers queue when exhausted.
    #[arg(long, env = "INTAKE_POOL_SIZE", default_value = "10")]
    pub pool_size: u32,

    /// Request timeout in seconds.
    #[arg(long, env = "INTAKE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "INTAKE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "INTAKE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            database_url: "clinic.db".to_string(),
            pool_size: 10,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.pool_size == 0 {
            errors.push("Pool size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing: ephemeral port,
    /// in-memory database, short timeout, no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            database_url: ":memory:".to_string(),
            pool_size: 1,
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
        }
    }
}
