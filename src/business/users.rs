//! User operations
//!
//! Minimal registry backing `journals.userId`. Session handling and password
//! hashing belong to the caller.

use log::info;
use crate::database::models::User;
use crate::database::queries;
use crate::error::Result;
use super::store::JournalStore;

impl JournalStore<'_> {
    /// Register a user and return its ID
    ///
    /// A duplicate email fails with `JournalError::Query`.
    pub fn create_user(&self, email: &str, password: &str) -> Result<i64> {
        let user_id = queries::insert_user(self.conn(), email, password)?;
        info!("event=user_create module=journal status=ok user_id={user_id}");
        Ok(user_id)
    }

    /// Find a user by email
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        queries::get_user_by_email(self.conn(), email)
    }

    /// Get a user by ID
    pub fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        queries::get_user_by_id(self.conn(), user_id)
    }
}
