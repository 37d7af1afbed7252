//! # intake-rest - HTTP API for clinic patient intake
//!
//! This crate exposes the patient intake record store over HTTP. It is a
//! thin translation layer: each handler validates and normalizes its
//! input, issues one store operation, and maps the result to a JSON
//! response.
//!
//! ## API Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/api/patients` | 200, array of records | 500 `{error}` |
//! | POST | `/api/patients` | 201 `{id}` | 400/500 `{error, details?}` |
//! | PUT | `/api/patients/{id}` | 200 `{message}` | 400/404/500 `{error}` |
//! | DELETE | `/api/patients/{id}` | 200 `{message}` | 404/500 `{error}` |
//! | GET | `/api/doctors` | 200, array of `{id, email}` | 500 `{error}` |
//! | GET | `/health` | 200 | 503 |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake_rest::{ServerConfig, create_app_with_config};
//! use intake_store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::open("clinic.db")?;
//!     store.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(store, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`payload`] - Request payload validation and coercion
//! - [`time`] - The shared event-time normalizer
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod routing;
pub mod state;
pub mod time;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use intake_store::PatientStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: PatientStorage + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the routes, request tracing, the request timeout, and CORS
/// (when enabled).
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: PatientStorage + 'static,
{
    info!(
        backend = store.backend_name(),
        "Creating intake API server"
    );

    let state = AppState::new(Arc::new(store), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "intake_rest={level},intake_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
