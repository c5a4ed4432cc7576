//! # Storage Module
//!
//! Handles all data persistence for the bookshelf.
//!
//! The domain layer only sees the [`BookStorage`] trait. Two implementations
//! ship with the crate:
//!
//! - **SQLite** (`sqlite`): a single `books` table accessed through SQLx,
//!   booleans stored as 0/1 integers
//! - **In-memory** (`memory`): a process-local map, used by tests and for
//!   throwaway instances
//!
//! Which one is used is decided by [`crate::config::StorageBackend`].

pub mod connection;
pub mod memory;
pub mod sqlite;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use memory::InMemoryBookRepository;
pub use sqlite::SqliteBookRepository;
pub use traits::BookStorage;
