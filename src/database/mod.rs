//! Database layer for Food Journal Core
//!
//! Handles SQLite database operations including:
//! - Connection lifecycle and one-time schema setup
//! - Schema creation and migrations
//! - Parameterized statements for users and journal entries

pub mod models;
pub mod schema;
pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::StorageHandle;
pub use models::*;
