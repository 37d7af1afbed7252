//! SQLite store implementation.

mod schema;
mod storage;

use std::fmt::Debug;
use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// SQLite store for patient intake records.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteStoreConfig,
    is_memory: bool,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquisition timeout in milliseconds. Callers queue for
    /// this long when the pool is exhausted rather than failing fast.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency on file-backed databases.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteStore {
    /// Creates a new in-memory SQLite store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_config(":memory:", SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: SqliteStoreConfig) -> StoreResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        // Each :memory: connection is its own database, so the pool must
        // never hand out more than one.
        let max_size = if is_memory { 1 } else { config.max_connections };

        let manager = SqliteConnectionManager::file(path.as_ref());

        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| StoreError::Pool {
                message: e.to_string(),
            })?;

        let store = Self {
            pool,
            config,
            is_memory,
        };

        store.configure_connection()?;

        Ok(store)
    }

    /// Initialize the database schema. Idempotent, safe on every start.
    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(StoreError::from)
    }

    /// Configure connection settings.
    fn configure_connection(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;

        conn.busy_timeout(std::time::Duration::from_millis(
            self.config.busy_timeout_ms as u64,
        ))
        .map_err(|e| StoreError::Database {
            message: format!("Failed to set busy timeout: {}", e),
        })?;

        if self.config.enable_wal && !self.is_memory {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| StoreError::Database {
                    message: format!("Failed to enable WAL mode: {}", e),
                })?;
        }

        Ok(())
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    /// Inserts a doctor reference row and returns its identifier.
    ///
    /// The doctors table is owned by an external collaborator in production;
    /// this hook exists for provisioning scripts and tests.
    pub fn add_doctor(&self, email: &str) -> StoreResult<i64> {
        let conn = self.get_connection()?;
        conn.execute("INSERT INTO doctors (email) VALUES (?1)", [email])?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.is_memory());
    }

    #[test]
    fn test_schema_initialization_is_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
    }

    #[test]
    fn test_file_backed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic.db");

        let store = SqliteStore::open(&path).unwrap();
        store.init_schema().unwrap();
        assert!(!store.is_memory());
        assert!(path.exists());
    }

    #[test]
    fn test_memory_pool_shares_one_database() {
        let store = SqliteStore::with_config(
            ":memory:",
            SqliteStoreConfig {
                max_connections: 10,
                ..Default::default()
            },
        )
        .unwrap();
        store.init_schema().unwrap();

        // Every acquisition must land on the one shared handle; a second
        // :memory: connection would see an empty database and fail here.
        store.add_doctor("dr.ahmed@clinic.example").unwrap();
        let conn = store.get_connection().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_add_doctor() {
        let store = SqliteStore::in_memory().unwrap();
        store.init_schema().unwrap();

        let first = store.add_doctor("dr.ahmed@clinic.example").unwrap();
        let second = store.add_doctor("dr.lee@clinic.example").unwrap();
        assert!(second > first);
    }
}
