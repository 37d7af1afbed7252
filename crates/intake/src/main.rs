//! Clinic patient intake API server.

use clap::Parser;
use intake_rest::{ServerConfig, create_app_with_config, init_logging};
use intake_store::{SqliteStore, SqliteStoreConfig};
use tracing::info;

/// Creates and initializes the SQLite store from the server configuration.
fn create_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    info!(database = %config.database_url, "Initializing SQLite store");

    let store_config = SqliteStoreConfig {
        max_connections: config.pool_size,
        ..Default::default()
    };

    let store = SqliteStore::with_config(&config.database_url, store_config)?;
    store.init_schema()?;

    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting clinic intake server"
    );

    let store = create_store(&config)?;
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
