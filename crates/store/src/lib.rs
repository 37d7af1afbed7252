//! # intake-store - Persistence layer for clinic patient intake
//!
//! This crate owns the relational storage for patient intake records and the
//! read-only doctors reference table. It exposes a small storage trait,
//! [`PatientStorage`], consumed by the HTTP layer, and a SQLite
//! implementation, [`SqliteStore`], backed by an r2d2 connection pool.
//!
//! ## Design
//!
//! - Every operation is a single parameterized SQL statement on one pooled
//!   connection; there are no multi-record transactions.
//! - Schema initialization is idempotent and safe to run on every start.
//! - `update` and `delete` inspect the affected-row count and report a
//!   distinguishable [`StoreError::NotFound`] when nothing matched.
//! - The `doctors` table is populated externally; this crate only reads it
//!   (plus a provisioning helper used by deployments and tests).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake_store::{PatientStorage, SqliteStore};
//!
//! let store = SqliteStore::open("clinic.db")?;
//! store.init_schema()?;
//! let patients = store.list_patients().await?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod sqlite;
pub mod storage;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use sqlite::{SqliteStore, SqliteStoreConfig};
pub use storage::PatientStorage;
pub use types::{Doctor, Patient, PatientDraft, PatientUpdate, Severity};
