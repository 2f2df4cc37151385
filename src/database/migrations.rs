//! Schema creation and upgrade logic
//!
//! Version 1 created `users` and `journals` without a rating column.
//! Version 2 adds `journals.rating INTEGER DEFAULT 3`.
//! The applied version is mirrored to `PRAGMA user_version`.

use rusqlite::Connection;
use log::info;
use crate::error::{JournalError, Result};
use super::schema;

/// Current schema version
pub const CURRENT_VERSION: u32 = 2;

/// Create missing tables and upgrade older layouts to the current version
///
/// Every statement is idempotent, so running this on an up-to-date database
/// changes nothing. Callers run it inside one transaction.
pub fn upgrade_database(conn: &Connection) -> Result<()> {
    let version = get_database_version(conn)?;

    if !is_version_compatible(version) {
        return Err(JournalError::StorageInit(format!(
            "database schema version {version} is newer than supported {CURRENT_VERSION}"
        )));
    }

    for sql in schema::CREATE_ALL_TABLES {
        conn.execute(sql, [])?;
    }

    if !table_has_column(conn, "journals", "rating")? {
        upgrade_to_v2(conn)?;
    }

    for sql in schema::CREATE_ALL_INDEXES {
        conn.execute(sql, [])?;
    }

    if version != CURRENT_VERSION {
        set_database_version(conn, CURRENT_VERSION)?;
        info!(
            "event=schema_upgrade module=db status=ok from_version={} to_version={}",
            version, CURRENT_VERSION
        );
    }

    Ok(())
}

/// Upgrade from v1 to v2
/// Adds the rating column to journals created before ratings existed
fn upgrade_to_v2(conn: &Connection) -> Result<()> {
    conn.execute(
        "ALTER TABLE journals ADD COLUMN rating INTEGER DEFAULT 3",
        [],
    )?;
    Ok(())
}

/// Check if database version is compatible
pub fn is_version_compatible(version: u32) -> bool {
    version <= CURRENT_VERSION
}

/// Get the schema version recorded in the database
pub fn get_database_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("PRAGMA user_version", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Record the schema version in the database
pub fn set_database_version(conn: &Connection, version: u32) -> Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    Ok(())
}

/// Check whether a table exists
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Check whether a table has the named column
pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}
