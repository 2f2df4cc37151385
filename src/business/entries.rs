//! Journal entry operations
//!
//! Write operations assume the caller already ran `EntryInput::validate()`;
//! the store persists whatever non-rejected input it receives.

use log::debug;
use crate::database::models::{EntryInput, JournalEntry};
use crate::database::queries;
use crate::error::{JournalError, Result};
use crate::utils::now_timestamp;
use super::store::JournalStore;

impl JournalStore<'_> {
    /// List a user's entries, newest first
    ///
    /// Returns an empty list when the user has no entries.
    pub fn list_entries(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        let raw_entries = queries::get_journals_by_user_raw(self.conn(), user_id)?;

        let mut entries = Vec::with_capacity(raw_entries.len());
        for raw in raw_entries {
            entries.push(raw.into_entry()?);
        }

        debug!(
            "event=entry_list module=journal status=ok user_id={} count={}",
            user_id,
            entries.len()
        );
        Ok(entries)
    }

    /// Get one entry by ID
    pub fn get_entry(&self, entry_id: i64) -> Result<Option<JournalEntry>> {
        queries::get_journal_raw(self.conn(), entry_id)?
            .map(|raw| raw.into_entry())
            .transpose()
    }

    /// Create an entry stamped with the current time and return its ID
    ///
    /// Precondition: `input` passed `EntryInput::validate()`. An unknown
    /// `user_id` fails with `JournalError::Query`.
    pub fn create_entry(&self, user_id: i64, input: &EntryInput) -> Result<i64> {
        let entry_id = queries::insert_journal(
            self.conn(),
            user_id,
            &input.image,
            &input.description,
            input.category,
            &now_timestamp(),
            input.rating,
        )?;

        debug!(
            "event=entry_create module=journal status=ok user_id={} entry_id={} category={}",
            user_id, entry_id, input.category
        );
        Ok(entry_id)
    }

    /// Replace image, description, category and rating of an entry
    ///
    /// Owner and creation date are never changed. Returns the number of rows
    /// updated; a missing ID updates nothing and is not an error.
    ///
    /// Precondition: `input` passed `EntryInput::validate()`.
    pub fn update_entry(&self, entry_id: i64, input: &EntryInput) -> Result<usize> {
        let changed = queries::update_journal(
            self.conn(),
            entry_id,
            &input.image,
            &input.description,
            input.category,
            input.rating,
        )?;

        debug!(
            "event=entry_update module=journal status=ok entry_id={} changed={}",
            entry_id, changed
        );
        Ok(changed)
    }

    /// Delete an entry
    ///
    /// Returns the number of rows removed; a missing ID is a silent no-op.
    pub fn delete_entry(&self, entry_id: i64) -> Result<usize> {
        let removed = queries::delete_journal(self.conn(), entry_id)?;

        debug!(
            "event=entry_delete module=journal status=ok entry_id={} removed={}",
            entry_id, removed
        );
        Ok(removed)
    }

    /// Count a user's entries
    pub fn count_entries(&self, user_id: i64) -> Result<usize> {
        let count = queries::count_journals_by_user(self.conn(), user_id)?;
        checked_count(count, user_id)
    }
}

fn checked_count(count: i64, user_id: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        JournalError::InvalidData(format!("entry count {count} for user {user_id} is out of range"))
    })
}
