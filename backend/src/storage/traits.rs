//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::book::Book;

/// Trait defining the interface for book storage operations
///
/// The domain layer only talks to this trait, so the SQLite repository and the
/// in-memory map can be swapped without touching the service.
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// Store a new book. Returns the number of records written.
    async fn insert_book(&self, book: &Book) -> Result<u64>;

    /// List every book in insertion order
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Retrieve a specific book by ID
    async fn get_book(&self, book_id: &str) -> Result<Option<Book>>;

    /// Overwrite the stored record that has `book.id`.
    /// Returns the number of records affected.
    async fn update_book(&self, book: &Book) -> Result<u64>;

    /// Delete a book by ID. Returns the number of records removed.
    async fn delete_book(&self, book_id: &str) -> Result<u64>;
}
