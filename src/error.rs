//! Error types for Food Journal Core

use thiserror::Error;

/// Main error type for journal storage operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Backing store could not be opened, configured or migrated
    #[error("Storage initialization failed: {0}")]
    StorageInit(String),

    /// A read or write statement failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A persisted row does not satisfy the journal model
    #[error("Invalid persisted data: {0}")]
    InvalidData(String),

    /// Rating outside the accepted 1..=5 range
    #[error("Invalid rating: {0} (expected 1 to 5)")]
    InvalidRating(i64),

    /// Unknown category or filter name
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Entry form failed caller-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Logger could not be started
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<rusqlite::Error> for JournalError {
    fn from(err: rusqlite::Error) -> Self {
        JournalError::Query(err.to_string())
    }
}

/// Result type alias for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JournalError::StorageInit("cannot open /tmp/x.db".to_string());
        assert!(err.to_string().contains("/tmp/x.db"));

        let err = JournalError::InvalidRating(9);
        assert_eq!(err.to_string(), "Invalid rating: 9 (expected 1 to 5)");

        let err = JournalError::InvalidCategory("All".to_string());
        assert!(err.to_string().contains("All"));

        let err = JournalError::Validation("description is empty".to_string());
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let journal_err: JournalError = sqlite_err.into();
        match journal_err {
            JournalError::Query(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Query"),
        }
    }
}
