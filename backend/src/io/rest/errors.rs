//! # REST API Errors
//!
//! Maps domain failures to the `{status: "fail", message}` envelope. Each
//! book operation has its own fixed (Indonesian) wording, so the error keeps
//! track of which operation produced it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::FailResponse;
use tracing::error;

use crate::domain::models::book::BookValidationError;
use crate::domain::BookServiceError;

pub const MSG_BOOK_ADDED: &str = "Buku berhasil ditambahkan";
pub const MSG_BOOK_UPDATED: &str = "Buku berhasil diperbarui";
pub const MSG_BOOK_DELETED: &str = "Buku berhasil dihapus";

/// The book operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    Add,
    List,
    Get,
    Update,
    Delete,
}

impl BookOperation {
    /// Prefix used for validation failures and generic server errors
    fn failure_prefix(self) -> &'static str {
        match self {
            BookOperation::Add => "Gagal menambahkan buku",
            BookOperation::List => "Gagal menampilkan daftar buku",
            BookOperation::Get => "Gagal menampilkan buku",
            BookOperation::Update => "Gagal memperbarui buku",
            BookOperation::Delete => "Buku gagal dihapus",
        }
    }

    fn not_found_message(self) -> String {
        match self {
            BookOperation::Get | BookOperation::List => "Buku tidak ditemukan".to_string(),
            _ => format!("{}. Id tidak ditemukan", self.failure_prefix()),
        }
    }

    fn validation_message(self, error: &BookValidationError) -> String {
        match error {
            BookValidationError::NameRequired => {
                format!("{}. Mohon isi nama buku", self.failure_prefix())
            }
            BookValidationError::ReadPageExceedsPageCount { .. } => format!(
                "{}. readPage tidak boleh lebih besar dari pageCount",
                self.failure_prefix()
            ),
            BookValidationError::Schema(message) => message.clone(),
        }
    }
}

/// Error returned by the book handlers
#[derive(Debug, thiserror::Error)]
pub enum BookApiError {
    #[error("{operation:?} failed: {source}")]
    Service {
        operation: BookOperation,
        #[source]
        source: BookServiceError,
    },
    /// The request could not be decoded (bad JSON body, bad query string)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BookApiError {
    pub fn service(operation: BookOperation, source: BookServiceError) -> Self {
        BookApiError::Service { operation, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookApiError::Service { source, .. } => match source {
                BookServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                BookServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                BookServiceError::Persistence(_) | BookServiceError::Unexpected(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            BookApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The user-facing message; never includes internal error details
    pub fn message(&self) -> String {
        match self {
            BookApiError::Service { operation, source } => match source {
                BookServiceError::Validation(e) => operation.validation_message(e),
                BookServiceError::NotFound(_) => operation.not_found_message(),
                BookServiceError::Persistence(_) | BookServiceError::Unexpected(_) => {
                    operation.failure_prefix().to_string()
                }
            },
            BookApiError::InvalidRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for BookApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{:?}", self);
        }
        (status, Json(FailResponse::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(operation: BookOperation, source: BookServiceError) -> BookApiError {
        BookApiError::service(operation, source)
    }

    #[test]
    fn test_validation_messages_per_operation() {
        let add = service_error(BookOperation::Add, BookValidationError::NameRequired.into());
        assert_eq!(add.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(add.message(), "Gagal menambahkan buku. Mohon isi nama buku");

        let update = service_error(
            BookOperation::Update,
            BookValidationError::ReadPageExceedsPageCount { read_page: 5.0, page_count: 1.0 }.into(),
        );
        assert_eq!(
            update.message(),
            "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
        );

        let schema = service_error(
            BookOperation::Add,
            BookValidationError::Schema("\"year\" is required".to_string()).into(),
        );
        assert_eq!(schema.message(), "\"year\" is required");
    }

    #[test]
    fn test_not_found_messages() {
        let cases = [
            (BookOperation::Get, "Buku tidak ditemukan"),
            (BookOperation::Update, "Gagal memperbarui buku. Id tidak ditemukan"),
            (BookOperation::Delete, "Buku gagal dihapus. Id tidak ditemukan"),
        ];

        for (operation, expected) in cases {
            let err = service_error(operation, BookServiceError::NotFound("x".to_string()));
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
            assert_eq!(err.message(), expected);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = service_error(
            BookOperation::Add,
            BookServiceError::Unexpected(anyhow::anyhow!("database is locked")),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Gagal menambahkan buku");

        let err = service_error(BookOperation::Add, BookServiceError::Persistence("id".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Gagal menambahkan buku");
    }
}
