//! backend/src/io/rest/mappers/book_mapper.rs

use chrono::SecondsFormat;
use shared::{Book as SharedBook, BookListQuery, BookSummary as SharedBookSummary};

use crate::domain::commands::books::BookListFilter;
use crate::domain::models::book::{Book as DomainBook, BookSummary as DomainBookSummary};

/// Mapper to convert between shared book DTOs and domain book models.
pub struct BookMapper;

impl BookMapper {
    /// Converts a domain Book model to a shared Book DTO.
    pub fn to_dto(domain: DomainBook) -> SharedBook {
        SharedBook {
            id: domain.id,
            name: domain.name,
            year: domain.year,
            author: domain.author,
            summary: domain.summary,
            publisher: domain.publisher,
            page_count: domain.page_count,
            read_page: domain.read_page,
            finished: domain.finished,
            reading: domain.reading,
            inserted_at: domain.inserted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: domain.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_summary_dto(domain: DomainBookSummary) -> SharedBookSummary {
        SharedBookSummary {
            id: domain.id,
            name: domain.name,
            publisher: domain.publisher,
        }
    }

    /// Converts the raw query string into typed list filters.
    pub fn to_filter(query: BookListQuery) -> BookListFilter {
        BookListFilter {
            name: query.name.filter(|name| !name.is_empty()),
            reading: query.reading.as_deref().and_then(parse_flag),
            finished: query.finished.as_deref().and_then(parse_flag),
        }
    }
}

/// Parse a `reading` / `finished` query flag.
///
/// Clients send `1` / `0`. An empty value means "don't filter". `true` and
/// `false` are accepted as spelled; any other value is read as a number where
/// non-zero is `true`, and anything non-numeric counts as `false`.
///
/// The `true` / `false` spellings are accepted on purpose, so `?reading=true`
/// filters on reading books instead of being read as a non-number.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        other => Some(other.parse::<f64>().map_or(false, |n| n != 0.0 && !n.is_nan())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("2"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("abc"), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_to_filter() {
        let filter = BookMapper::to_filter(BookListQuery {
            name: Some("".to_string()),
            reading: Some("1".to_string()),
            finished: None,
        });
        assert_eq!(
            filter,
            BookListFilter { name: None, reading: Some(true), finished: None }
        );

        let filter = BookMapper::to_filter(BookListQuery {
            name: Some("Jaman".to_string()),
            reading: Some("".to_string()),
            finished: Some("0".to_string()),
        });
        assert_eq!(
            filter,
            BookListFilter { name: Some("Jaman".to_string()), reading: None, finished: Some(false) }
        );
    }

    #[test]
    fn test_to_dto_formats_timestamps() {
        let inserted = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let book = DomainBook {
            id: "id-1".to_string(),
            name: "Jaman".to_string(),
            year: 2000,
            author: "AuthorABC".to_string(),
            summary: "Good book".to_string(),
            publisher: "PubABCDE".to_string(),
            page_count: 10,
            read_page: 10,
            finished: true,
            reading: false,
            inserted_at: inserted,
            updated_at: inserted,
        };

        let dto = BookMapper::to_dto(book);
        assert_eq!(dto.inserted_at, "2024-01-02T03:04:05.000Z");
        assert_eq!(dto.updated_at, "2024-01-02T03:04:05.000Z");
        assert!(dto.finished);
    }
}
