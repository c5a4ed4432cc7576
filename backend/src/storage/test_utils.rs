//! Test doubles for [`BookStorage`] shared by service and router tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::domain::models::book::Book;
use crate::storage::traits::BookStorage;

/// Error text every [`BrokenStorage`] call fails with
pub const BROKEN_STORAGE_ERROR: &str = "disk on fire";

/// Store whose every call fails
pub struct BrokenStorage;

#[async_trait]
impl BookStorage for BrokenStorage {
    async fn insert_book(&self, _book: &Book) -> Result<u64> {
        Err(anyhow!(BROKEN_STORAGE_ERROR))
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        Err(anyhow!(BROKEN_STORAGE_ERROR))
    }

    async fn get_book(&self, _book_id: &str) -> Result<Option<Book>> {
        Err(anyhow!(BROKEN_STORAGE_ERROR))
    }

    async fn update_book(&self, _book: &Book) -> Result<u64> {
        Err(anyhow!(BROKEN_STORAGE_ERROR))
    }

    async fn delete_book(&self, _book_id: &str) -> Result<u64> {
        Err(anyhow!(BROKEN_STORAGE_ERROR))
    }
}
