//! In-process book storage.
//!
//! Keeps records in a map keyed by book ID. Each record carries the sequence
//! number it was inserted with so listings come back in insertion order.
//! Nothing survives a restart.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::models::book::Book;
use crate::storage::traits::BookStorage;

#[derive(Default)]
struct BookTable {
    next_seq: u64,
    rows: HashMap<String, (u64, Book)>,
}

/// Repository for book operations backed by a process-local map
#[derive(Default)]
pub struct InMemoryBookRepository {
    table: RwLock<BookTable>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStorage for InMemoryBookRepository {
    async fn insert_book(&self, book: &Book) -> Result<u64> {
        let mut table = self.table.write().await;
        if table.rows.contains_key(&book.id) {
            return Err(anyhow::anyhow!("Book already exists: {}", book.id));
        }

        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(book.id.clone(), (seq, book.clone()));
        Ok(1)
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let table = self.table.read().await;
        let mut rows: Vec<&(u64, Book)> = table.rows.values().collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, book)| book.clone()).collect())
    }

    async fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        let table = self.table.read().await;
        Ok(table.rows.get(book_id).map(|(_, book)| book.clone()))
    }

    async fn update_book(&self, book: &Book) -> Result<u64> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&book.id) {
            Some((_, stored)) => {
                let inserted_at = stored.inserted_at;
                *stored = book.clone();
                stored.inserted_at = inserted_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_book(&self, book_id: &str) -> Result<u64> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(book_id).map_or(0, |_| 1))
    }
}
