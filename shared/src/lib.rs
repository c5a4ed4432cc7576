use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A book record as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    /// Derived on the server: `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    /// ISO 8601 UTC timestamp with millisecond precision
    pub inserted_at: String,
    /// ISO 8601 UTC timestamp with millisecond precision
    pub updated_at: String,
}

/// Reduced view of a book returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

/// Request body for creating or replacing a book.
///
/// Every field is kept as raw JSON so the server can report precisely which
/// field is missing or has the wrong type instead of rejecting the whole body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub publisher: Option<Value>,
    #[serde(default)]
    pub page_count: Option<Value>,
    #[serde(default)]
    pub read_page: Option<Value>,
    #[serde(default)]
    pub reading: Option<Value>,
}

/// Query string accepted by `GET /books`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookListQuery {
    pub name: Option<String>,
    /// `"1"` / `"0"` flag
    pub reading: Option<String>,
    /// `"1"` / `"0"` flag
    pub finished: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Envelope for every successful book response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message_and_data(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Envelope for every client or server side failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl FailResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: message.into(),
        }
    }
}

/// Bare `{message}` body used by the root path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookIdData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book {
            id: "abc".to_string(),
            name: "Jaman".to_string(),
            year: 2000,
            author: "AuthorABC".to_string(),
            summary: "Good book".to_string(),
            publisher: "PubABCDE".to_string(),
            page_count: 100,
            read_page: 50,
            finished: false,
            reading: true,
            inserted_at: "2023-12-14T01:02:02.000Z".to_string(),
            updated_at: "2023-12-14T01:02:02.000Z".to_string(),
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["pageCount"], 100);
        assert_eq!(value["readPage"], 50);
        assert_eq!(value["insertedAt"], "2023-12-14T01:02:02.000Z");
        assert!(value.get("page_count").is_none());
    }

    #[test]
    fn test_payload_missing_fields_are_none() {
        let payload: BookPayload = serde_json::from_value(json!({
            "name": "Jaman",
            "pageCount": 10
        }))
        .unwrap();

        assert_eq!(payload.name, Some(json!("Jaman")));
        assert_eq!(payload.page_count, Some(json!(10)));
        assert!(payload.year.is_none());
        assert!(payload.reading.is_none());
    }

    #[test]
    fn test_success_envelope_skips_empty_parts() {
        let body = serde_json::to_value(SuccessResponse::with_message("Buku berhasil dihapus")).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "Buku berhasil dihapus"}));

        let body = serde_json::to_value(SuccessResponse::with_data(BookListData { books: vec![] })).unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"books": []}}));
    }

    #[test]
    fn test_book_id_data_field_name() {
        let body = serde_json::to_value(SuccessResponse::with_message_and_data(
            "Buku berhasil ditambahkan",
            BookIdData { book_id: "xyz".to_string() },
        ))
        .unwrap();

        assert_eq!(body["data"]["bookId"], "xyz");
        assert_eq!(body["status"], "success");
    }

    #[test]
    fn test_fail_envelope() {
        let body = serde_json::to_value(FailResponse::new("Buku tidak ditemukan")).unwrap();
        assert_eq!(body, json!({"status": "fail", "message": "Buku tidak ditemukan"}));
    }
}
