use chrono::{Datelike, Utc};
use shared::BookPayload;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::books::BookListFilter;
use crate::domain::models::book::{Book, BookSummary, BookValidationError};
use crate::domain::validation::validate_book;
use crate::storage::BookStorage;

/// Failures a book operation can end in
#[derive(Debug, thiserror::Error)]
pub enum BookServiceError {
    #[error(transparent)]
    Validation(#[from] BookValidationError),
    #[error("Book not found: {0}")]
    NotFound(String),
    #[error("Store did not confirm the write for book {0}")]
    Persistence(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type BookResult<T> = Result<T, BookServiceError>;

/// Service for managing books on top of any [`BookStorage`]
#[derive(Clone)]
pub struct BookService {
    storage: Arc<dyn BookStorage>,
}

impl BookService {
    pub fn new(storage: Arc<dyn BookStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store a new book, returning its ID
    pub async fn add_book(&self, payload: &BookPayload) -> BookResult<String> {
        info!("Adding book: {:?}", payload.name);

        let fields = validate_book(payload, current_year()).map_err(|e| {
            warn!("Rejected new book: {}", e);
            e
        })?;

        let book = Book::new(Book::generate_id(), fields, Utc::now());
        let written = self.storage.insert_book(&book).await?;
        if written == 0 {
            return Err(BookServiceError::Persistence(book.id));
        }

        // Read back before reporting success
        if self.storage.get_book(&book.id).await?.is_none() {
            return Err(BookServiceError::Persistence(book.id));
        }

        info!("Added book '{}' with ID: {}", book.name, book.id);
        Ok(book.id)
    }

    /// List book projections matching every given filter
    pub async fn list_books(&self, filter: &BookListFilter) -> BookResult<Vec<BookSummary>> {
        info!("Listing books with filter: {:?}", filter);

        let books = self.storage.list_books().await?;
        let needle = filter.name.as_ref().map(|name| name.to_lowercase());

        let summaries: Vec<BookSummary> = books
            .iter()
            .filter(|book| filter.reading.map_or(true, |reading| book.reading == reading))
            .filter(|book| filter.finished.map_or(true, |finished| book.finished == finished))
            .filter(|book| {
                needle
                    .as_ref()
                    .map_or(true, |needle| book.name.to_lowercase().contains(needle.as_str()))
            })
            .map(Book::summary)
            .collect();

        info!("Found {} of {} books", summaries.len(), books.len());
        Ok(summaries)
    }

    /// Get the full record for a book
    pub async fn get_book(&self, book_id: &str) -> BookResult<Book> {
        info!("Getting book: {}", book_id);

        match self.storage.get_book(book_id).await? {
            Some(book) => Ok(book),
            None => {
                warn!("Book not found: {}", book_id);
                Err(BookServiceError::NotFound(book_id.to_string()))
            }
        }
    }

    /// Replace every mutable field of an existing book
    pub async fn update_book(&self, book_id: &str, payload: &BookPayload) -> BookResult<()> {
        info!("Updating book: {}", book_id);

        let mut book = self.get_book(book_id).await?;

        let fields = validate_book(payload, current_year()).map_err(|e| {
            warn!("Rejected update for book {}: {}", book_id, e);
            e
        })?;

        book.replace_fields(fields, Utc::now());

        if self.storage.update_book(&book).await? == 0 {
            warn!("Book disappeared before update: {}", book_id);
            return Err(BookServiceError::NotFound(book_id.to_string()));
        }

        info!("Updated book '{}' with ID: {}", book.name, book.id);
        Ok(())
    }

    /// Delete an existing book
    pub async fn delete_book(&self, book_id: &str) -> BookResult<()> {
        info!("Deleting book: {}", book_id);

        let book = self.get_book(book_id).await?;

        if self.storage.delete_book(book_id).await? == 0 {
            warn!("Book disappeared before delete: {}", book_id);
            return Err(BookServiceError::NotFound(book_id.to_string()));
        }

        info!("Deleted book '{}' with ID: {}", book.name, book.id);
        Ok(())
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
