use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::book::Book;
use crate::storage::connection::DbConnection;
use crate::storage::traits::BookStorage;

const BOOK_COLUMNS: &str = "id, name, year, author, summary, publisher, page_count, read_page, \
                            finished, reading, inserted_at, updated_at";

/// Repository for book operations backed by SQLite
#[derive(Clone)]
pub struct SqliteBookRepository {
    db: DbConnection,
}

impl SqliteBookRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_book(row: &SqliteRow) -> Result<Book> {
        let inserted_at: String = row.try_get("inserted_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        let finished: i64 = row.try_get("finished")?;
        let reading: i64 = row.try_get("reading")?;

        Ok(Book {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            year: row.try_get("year")?,
            author: row.try_get("author")?,
            summary: row.try_get("summary")?,
            publisher: row.try_get("publisher")?,
            page_count: row.try_get("page_count")?,
            read_page: row.try_get("read_page")?,
            finished: finished != 0,
            reading: reading != 0,
            inserted_at: parse_timestamp(&inserted_at).context("Failed to parse inserted_at")?,
            updated_at: parse_timestamp(&updated_at).context("Failed to parse updated_at")?,
        })
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}

#[async_trait]
impl BookStorage for SqliteBookRepository {
    async fn insert_book(&self, book: &Book) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (id, name, year, author, summary, publisher, page_count, read_page,
                               finished, reading, inserted_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.id)
        .bind(&book.name)
        .bind(book.year)
        .bind(&book.author)
        .bind(&book.summary)
        .bind(&book.publisher)
        .bind(book.page_count)
        .bind(book.read_page)
        .bind(flag(book.finished))
        .bind(flag(book.reading))
        .bind(format_timestamp(&book.inserted_at))
        .bind(format_timestamp(&book.updated_at))
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(&format!("SELECT {} FROM books ORDER BY rowid ASC", BOOK_COLUMNS))
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        let row = sqlx::query(&format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS))
            .bind(book_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_book).transpose()
    }

    async fn update_book(&self, book: &Book) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET name = ?, year = ?, author = ?, summary = ?, publisher = ?,
                page_count = ?, read_page = ?, finished = ?, reading = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.name)
        .bind(book.year)
        .bind(&book.author)
        .bind(&book.summary)
        .bind(&book.publisher)
        .bind(book.page_count)
        .bind(book.read_page)
        .bind(flag(book.finished))
        .bind(flag(book.reading))
        .bind(format_timestamp(&book.updated_at))
        .bind(&book.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_book(&self, book_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
