//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::StoreResult;

/// Initialize the database schema.
///
/// Both statements are `CREATE TABLE IF NOT EXISTS`, so this is idempotent
/// and safe to invoke on every process start. Column names are camelCase
/// where the wire contract is, so rows map to JSON without aliasing.
pub fn initialize_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS patients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL,
            time TEXT,
            location TEXT,
            severity TEXT,
            bodyPart TEXT,
            description TEXT,
            requiredAction TEXT,
            doctor TEXT,
            createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    // Owned and populated by an external collaborator; created here only so
    // the read path cannot fail on a fresh database.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
