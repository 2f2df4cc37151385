//! Business logic layer for Food Journal Core
//!
//! This module provides the `JournalStore` API for managing users and
//! journal entries, plus pure statistics and filtering over loaded entries.

pub mod store;
pub mod entries;
pub mod users;
pub mod stats;
pub mod search;

pub use store::JournalStore;
pub use stats::compute_statistics;
pub use search::filter_entries;
