//! Main journal store API
//!
//! `JournalStore` borrows a ready connection from a `StorageHandle`.
//! Constructing it is the startup step that initializes storage, so every
//! store operation runs against an existing schema.

use rusqlite::Connection;
use crate::database::StorageHandle;
use crate::error::Result;

/// Journal store bound to an initialized connection
pub struct JournalStore<'h> {
    /// Ready connection owned by the storage handle
    conn: &'h Connection,
}

impl<'h> JournalStore<'h> {
    /// Initialize storage if needed and bind a store to it
    ///
    /// Fails with `JournalError::StorageInit` when the store cannot be opened
    /// or the schema cannot be created.
    pub fn new(handle: &'h StorageHandle) -> Result<Self> {
        let conn = handle.ensure_ready()?;
        Ok(Self { conn })
    }

    /// Get the underlying connection
    pub(crate) fn conn(&self) -> &'h Connection {
        self.conn
    }
}
