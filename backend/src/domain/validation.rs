//! # Book Validation
//!
//! Turns a raw [`BookPayload`] into [`BookFields`] or the first rule it
//! breaks. Checks run in a fixed order and stop at the first failure:
//!
//! 1. `name` must be a non-empty string
//! 2. `readPage` must not exceed `pageCount` (only when both are numbers)
//! 3. schema checks for `year, author, summary, publisher, pageCount,
//!    readPage, reading`, in that order, all required
//!
//! Schema messages use the `"<field>" ...` wording clients already parse.

use serde_json::Value;
use shared::BookPayload;

use crate::domain::models::book::{BookFields, BookValidationError};

pub const MIN_TEXT_LENGTH: usize = 5;
pub const MAX_TEXT_LENGTH: usize = 255;

/// Validate a candidate book against the rules for `current_year`
pub fn validate_book(payload: &BookPayload, current_year: i32) -> Result<BookFields, BookValidationError> {
    let name = match &payload.name {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => return Err(BookValidationError::NameRequired),
    };

    if let (Some(Value::Number(read_page)), Some(Value::Number(page_count))) =
        (&payload.read_page, &payload.page_count)
    {
        let read_page = read_page.as_f64().unwrap_or_default();
        let page_count = page_count.as_f64().unwrap_or_default();
        if read_page > page_count {
            return Err(BookValidationError::ReadPageExceedsPageCount { read_page, page_count });
        }
    }

    let year = integer_field("year", &payload.year)?;
    if year > i64::from(current_year) {
        return Err(schema(format!(
            "\"year\" must be less than or equal to {}",
            current_year
        )));
    }
    let year = i32::try_from(year).map_err(|_| schema("\"year\" must be a safe number".to_string()))?;

    let author = text_field("author", &payload.author, Some(MAX_TEXT_LENGTH))?;
    let summary = text_field("summary", &payload.summary, None)?;
    let publisher = text_field("publisher", &payload.publisher, Some(MAX_TEXT_LENGTH))?;
    let page_count = count_field("pageCount", &payload.page_count)?;
    let read_page = count_field("readPage", &payload.read_page)?;
    let reading = bool_field("reading", &payload.reading)?;

    Ok(BookFields {
        name,
        year,
        author,
        summary,
        publisher,
        page_count,
        read_page,
        reading,
    })
}

fn schema(message: String) -> BookValidationError {
    BookValidationError::Schema(message)
}

fn required<'a>(field: &str, value: &'a Option<Value>) -> Result<&'a Value, BookValidationError> {
    match value {
        Some(value) => Ok(value),
        None => Err(schema(format!("\"{}\" is required", field))),
    }
}

/// Only JSON numbers count; numeric strings such as `"2000"` are rejected.
fn integer_field(field: &str, value: &Option<Value>) -> Result<i64, BookValidationError> {
    let Value::Number(number) = required(field, value)? else {
        return Err(schema(format!("\"{}\" must be a number", field)));
    };

    if let Some(int) = number.as_i64() {
        return Ok(int);
    }

    // Whole floats such as `100.0` are accepted; u64 values past i64::MAX are not.
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 => Ok(float as i64),
        Some(float) if float.fract() == 0.0 => Err(schema(format!("\"{}\" must be a safe number", field))),
        _ => Err(schema(format!("\"{}\" must be an integer", field))),
    }
}

fn count_field(field: &str, value: &Option<Value>) -> Result<i64, BookValidationError> {
    let count = integer_field(field, value)?;
    if count < 0 {
        return Err(schema(format!("\"{}\" must be greater than or equal to 0", field)));
    }
    Ok(count)
}

fn text_field(field: &str, value: &Option<Value>, max: Option<usize>) -> Result<String, BookValidationError> {
    let Value::String(text) = required(field, value)? else {
        return Err(schema(format!("\"{}\" must be a string", field)));
    };

    if text.is_empty() {
        return Err(schema(format!("\"{}\" is not allowed to be empty", field)));
    }

    let length = text.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Err(schema(format!(
            "\"{}\" length must be at least {} characters long",
            field, MIN_TEXT_LENGTH
        )));
    }
    if let Some(max) = max {
        if length > max {
            return Err(schema(format!(
                "\"{}\" length must be less than or equal to {} characters long",
                field, max
            )));
        }
    }

    Ok(text.clone())
}

/// Only JSON booleans count; `"true"` as a string is rejected.
fn bool_field(field: &str, value: &Option<Value>) -> Result<bool, BookValidationError> {
    match required(field, value)? {
        Value::Bool(flag) => Ok(*flag),
        _ => Err(schema(format!("\"{}\" must be a boolean", field))),
    }
}
