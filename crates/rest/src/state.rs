//! Application state for the intake REST API.

use std::sync::Arc;

use intake_store::PatientStorage;

use crate::config::ServerConfig;

/// Shared application state available to all request handlers.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`PatientStorage`])
pub struct AppState<S> {
    /// The storage backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: PatientStorage> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
