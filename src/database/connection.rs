//! Database connection management
//!
//! `StorageHandle` owns the single journal connection. It opens nothing until
//! `ensure_ready` is called; the first successful call opens the store,
//! applies connection pragmas and runs schema creation in one transaction.
//! A failed call leaves the handle uninitialized so the next call retries.

use std::fs;
use std::time::{Duration, Instant};
use log::{debug, error, info};
use once_cell::unsync::OnceCell;
use rusqlite::Connection;
use crate::config::{StoreConfig, StoreLocation};
use crate::error::{JournalError, Result};
use super::migrations;

/// Owner of the journal database connection
pub struct StorageHandle {
    /// Settings used when the connection is opened
    config: StoreConfig,
    /// Set once initialization has fully succeeded
    conn: OnceCell<Connection>,
}

impl StorageHandle {
    /// Create an uninitialized handle
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            conn: OnceCell::new(),
        }
    }

    /// Open the store and create the schema on first call
    ///
    /// Later calls return the same connection without touching the schema.
    pub fn ensure_ready(&self) -> Result<&Connection> {
        self.conn.get_or_try_init(|| open_and_prepare(&self.config))
    }

    /// Check if initialization has succeeded
    pub fn is_ready(&self) -> bool {
        self.conn.get().is_some()
    }

    /// Get the ready connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.get().ok_or_else(|| {
            JournalError::StorageInit("storage has not been initialized".to_string())
        })
    }

    /// Get the configuration this handle was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Force a WAL checkpoint to write all data to the main database file
    ///
    /// Uses TRUNCATE mode which checkpoints all frames and truncates the WAL file.
    pub fn checkpoint(&self) -> Result<()> {
        self.connection()?.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")?;
        Ok(())
    }
}

fn open_and_prepare(config: &StoreConfig) -> Result<Connection> {
    let started_at = Instant::now();
    let mode = mode_label(config);
    info!("event=db_open module=db status=start mode={mode}");

    let result = open_connection(config).and_then(|mut conn| {
        bootstrap_connection(&mut conn, config)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            let err = into_init_error(err);
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn open_connection(config: &StoreConfig) -> Result<Connection> {
    match &config.location {
        StoreLocation::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        JournalError::StorageInit(format!(
                            "failed to create directory `{}`: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
            Connection::open(path).map_err(|e| {
                JournalError::StorageInit(format!(
                    "failed to open database at `{}`: {e}",
                    path.display()
                ))
            })
        }
        StoreLocation::InMemory => Connection::open_in_memory().map_err(|e| {
            JournalError::StorageInit(format!("failed to create in-memory database: {e}"))
        }),
    }
}

fn bootstrap_connection(conn: &mut Connection, config: &StoreConfig) -> Result<()> {
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;

    // Pragmas below are no-ops inside a transaction
    let foreign_keys = if config.foreign_keys { "ON" } else { "OFF" };
    conn.execute_batch(&format!("PRAGMA foreign_keys = {foreign_keys};"))?;

    if config.wal {
        let journal_mode: String =
            conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        debug!("event=db_pragma module=db journal_mode={journal_mode}");
    }

    let tx = conn.transaction()?;
    migrations::upgrade_database(&tx)?;
    tx.commit()?;

    Ok(())
}

fn into_init_error(err: JournalError) -> JournalError {
    match err {
        JournalError::StorageInit(_) => err,
        other => JournalError::StorageInit(other.to_string()),
    }
}

fn mode_label(config: &StoreConfig) -> &'static str {
    match config.location {
        StoreLocation::File(_) => "file",
        StoreLocation::InMemory => "memory",
    }
}
