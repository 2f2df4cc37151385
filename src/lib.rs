//! # Food Journal Core
//!
//! Local storage and aggregation engine for a personal food journal.
//!
//! ## Features
//!
//! - SQLite storage with write-ahead logging
//! - One-time, idempotent schema creation and upgrade
//! - Per-user journal entries (create, list, update, delete)
//! - Category and text filtering
//! - Per-category counts and average meal rating
//!
//! ## Example
//!
//! ```no_run
//! use food_journal_core::{
//!     compute_statistics, Category, EntryInput, JournalStore, StorageHandle, StoreConfig,
//! };
//! use std::path::Path;
//!
//! let handle = StorageHandle::new(StoreConfig::in_folder(Path::new("/path/to/app-data")));
//! let store = JournalStore::new(&handle).unwrap();
//!
//! let user_id = store.create_user("me@example.com", "secret").unwrap();
//! let input = EntryInput::new("file:///photos/oats.jpg", "Oatmeal", Category::Breakfast);
//! input.validate().unwrap();
//! store.create_entry(user_id, &input).unwrap();
//!
//! let entries = store.list_entries(user_id).unwrap();
//! let stats = compute_statistics(&entries);
//! println!("{} entries, average rating {}", stats.total, stats.average_rating);
//! ```

pub mod business;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod utils;

// Re-export main types
pub use business::{JournalStore, compute_statistics, filter_entries};
pub use config::{StoreConfig, StoreLocation};
pub use database::StorageHandle;
pub use database::models::{
    AverageRating, Category, CategoryFilter, EntryInput, JournalEntry, JournalStatistics, Rating,
    User,
};
pub use error::{JournalError, Result};
pub use logging::{default_log_level, init_logging};

/// Database filename used for folder-based stores
pub const DATABASE_FILENAME: &str = "FoodJournal.db";

/// Rating applied when the caller does not pick one
pub const DEFAULT_RATING: u8 = 3;

/// Lowest accepted meal rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted meal rating
pub const MAX_RATING: u8 = 5;

/// Default SQLite busy timeout in milliseconds
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
