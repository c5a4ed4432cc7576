use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted book record
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The validated, client-controlled part of a book
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub reading: bool,
}

/// The `{id, name, publisher}` view used by list results
#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl Book {
    pub fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Build a fresh record; both timestamps are set to `now`
    pub fn new(id: String, fields: BookFields, now: DateTime<Utc>) -> Self {
        let finished = fields.read_page == fields.page_count;
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            finished,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field. `id` and `inserted_at` are kept.
    pub fn replace_fields(&mut self, fields: BookFields, now: DateTime<Utc>) {
        self.finished = fields.read_page == fields.page_count;
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        // updated_at must never fall behind inserted_at
        self.updated_at = now.max(self.inserted_at);
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("readPage ({read_page}) exceeds pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: f64, page_count: f64 },
    /// A schema rule failed; carries the user-facing message
    #[error("{0}")]
    Schema(String),
}
