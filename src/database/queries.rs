//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For use-case level operations, use the `JournalStore` API.

use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::database::models::{Category, JournalEntry, Rating, User};
use crate::error::{JournalError, Result};
use crate::utils::parse_datetime;

const JOURNAL_SELECT_SQL: &str =
    "SELECT id, userId, image, description, date, category, rating FROM journals";

// ============================================================================
// Users queries
// ============================================================================

/// Insert a user and return its ID
pub fn insert_user(conn: &Connection, email: &str, password: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (email, password) VALUES (?, ?)",
        params![email, password],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get a user by email
pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, email, password FROM users WHERE email = ?",
            [email],
            map_user_row,
        )
        .optional()?;
    Ok(user)
}

/// Get a user by ID
pub fn get_user_by_id(conn: &Connection, user_id: i64) -> Result<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, email, password FROM users WHERE id = ?",
            [user_id],
            map_user_row,
        )
        .optional()?;
    Ok(user)
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        password: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}

// ============================================================================
// Journals queries
// ============================================================================

/// Raw journal row as stored, before model validation
#[derive(Debug, Clone)]
pub struct RawJournal {
    pub id: i64,
    pub user_id: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub rating: Option<i64>,
}

impl RawJournal {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            image: row.get(2)?,
            description: row.get(3)?,
            date: row.get(4)?,
            category: row.get(5)?,
            rating: row.get(6)?,
        })
    }

    /// Decode into the journal model, rejecting rows that break it
    pub fn into_entry(self) -> Result<JournalEntry> {
        let user_id = self.user_id.ok_or_else(|| {
            JournalError::InvalidData(format!("missing journals.userId for entry {}", self.id))
        })?;

        let date_text = self.date.unwrap_or_default();
        let date = parse_datetime(&date_text).ok_or_else(|| {
            JournalError::InvalidData(format!(
                "invalid date `{date_text}` in journals.date for entry {}",
                self.id
            ))
        })?;

        let category_text = self.category.unwrap_or_default();
        let category = Category::from_db(&category_text).ok_or_else(|| {
            JournalError::InvalidData(format!(
                "invalid category `{category_text}` in journals.category for entry {}",
                self.id
            ))
        })?;

        Ok(JournalEntry {
            id: self.id,
            user_id,
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date,
            category,
            rating: Rating::from_db(self.rating)?,
        })
    }
}

/// Insert a journal row and return its ID
pub fn insert_journal(
    conn: &Connection,
    user_id: i64,
    image: &str,
    description: &str,
    category: Category,
    date: &str,
    rating: Rating,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO journals (userId, image, description, category, date, rating)
         VALUES (?, ?, ?, ?, ?, ?)",
        params![user_id, image, description, category.as_str(), date, rating.value()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update the editable columns of a journal row
///
/// Returns the number of rows changed (0 when the ID does not exist).
pub fn update_journal(
    conn: &Connection,
    journal_id: i64,
    image: &str,
    description: &str,
    category: Category,
    rating: Rating,
) -> Result<usize> {
    let changed = conn.execute(
        "UPDATE journals SET image = ?, description = ?, category = ?, rating = ? WHERE id = ?",
        params![image, description, category.as_str(), rating.value(), journal_id],
    )?;
    Ok(changed)
}

/// Delete a journal row
///
/// Returns the number of rows removed (0 when the ID does not exist).
pub fn delete_journal(conn: &Connection, journal_id: i64) -> Result<usize> {
    let removed = conn.execute("DELETE FROM journals WHERE id = ?", [journal_id])?;
    Ok(removed)
}

/// Get all journal rows for a user, newest first
pub fn get_journals_by_user_raw(conn: &Connection, user_id: i64) -> Result<Vec<RawJournal>> {
    let mut stmt = conn.prepare(&format!(
        "{JOURNAL_SELECT_SQL} WHERE userId = ? ORDER BY date DESC, id DESC"
    ))?;

    let rows = stmt.query_map([user_id], RawJournal::from_row)?;

    rows.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get one journal row by ID
pub fn get_journal_raw(conn: &Connection, journal_id: i64) -> Result<Option<RawJournal>> {
    let raw = conn
        .query_row(
            &format!("{JOURNAL_SELECT_SQL} WHERE id = ?"),
            [journal_id],
            RawJournal::from_row,
        )
        .optional()?;
    Ok(raw)
}

/// Count journal rows for a user
pub fn count_journals_by_user(conn: &Connection, user_id: i64) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM journals WHERE userId = ?",
        [user_id],
        |row| row.get(0),
    )?;
    Ok(count)
}
