//! Error types for the persistence layer.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No patient row matched the given identifier.
    #[error("patient not found: {id}")]
    NotFound { id: i64 },

    /// A patient referenced a doctor that does not exist in the doctors table.
    #[error("unknown doctor reference: {doctor}")]
    UnknownDoctor { doctor: String },

    /// Failed to acquire a connection from the pool.
    #[error("connection pool error: {message}")]
    Pool { message: String },

    /// A statement failed inside SQLite.
    #[error("database error: {message}")]
    Database { message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database {
            message: err.to_string(),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Pool {
            message: err.to_string(),
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
