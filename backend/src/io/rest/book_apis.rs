//! # REST API for Book Management
//!
//! Endpoints for creating, listing, retrieving, updating, and deleting books.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{BookData, BookIdData, BookListData, BookListQuery, BookPayload, SuccessResponse};
use tracing::info;

use crate::io::rest::errors::{
    BookApiError, BookOperation, MSG_BOOK_ADDED, MSG_BOOK_DELETED, MSG_BOOK_UPDATED,
};
use crate::io::rest::mappers::book_mapper::BookMapper;
use crate::AppState;

fn payload_or_fail(payload: Result<Json<BookPayload>, JsonRejection>) -> Result<BookPayload, BookApiError> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| BookApiError::InvalidRequest(rejection.body_text()))
}

fn book_id_or_fail(book_id: Result<Path<String>, PathRejection>) -> Result<String, BookApiError> {
    book_id
        .map(|Path(book_id)| book_id)
        .map_err(|rejection| BookApiError::InvalidRequest(rejection.body_text()))
}

/// Create a new book
pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse, BookApiError> {
    let payload = payload_or_fail(payload)?;
    info!("POST /books - request: {:?}", payload);

    let book_id = state
        .book_service
        .add_book(&payload)
        .await
        .map_err(|e| BookApiError::service(BookOperation::Add, e))?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_message_and_data(MSG_BOOK_ADDED, BookIdData { book_id })),
    ))
}

/// List books, optionally filtered by name, reading and finished
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<BookListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, BookApiError> {
    let Query(query) = query.map_err(|rejection| BookApiError::InvalidRequest(rejection.body_text()))?;
    info!("GET /books - query: {:?}", query);

    let filter = BookMapper::to_filter(query);
    let books = state
        .book_service
        .list_books(&filter)
        .await
        .map_err(|e| BookApiError::service(BookOperation::List, e))?;

    let books = books.into_iter().map(BookMapper::to_summary_dto).collect();
    Ok((StatusCode::OK, Json(SuccessResponse::with_data(BookListData { books }))))
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, BookApiError> {
    let book_id = book_id_or_fail(book_id)?;
    info!("GET /books/{}", book_id);

    let book = state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(|e| BookApiError::service(BookOperation::Get, e))?;

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::with_data(BookData { book: BookMapper::to_dto(book) })),
    ))
}

/// Replace a book's fields
pub async fn update_book(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse, BookApiError> {
    let book_id = book_id_or_fail(book_id)?;
    let payload = payload_or_fail(payload)?;
    info!("PUT /books/{} - request: {:?}", book_id, payload);

    state
        .book_service
        .update_book(&book_id, &payload)
        .await
        .map_err(|e| BookApiError::service(BookOperation::Update, e))?;

    Ok((StatusCode::OK, Json(SuccessResponse::with_message(MSG_BOOK_UPDATED))))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, BookApiError> {
    let book_id = book_id_or_fail(book_id)?;
    info!("DELETE /books/{}", book_id);

    state
        .book_service
        .delete_book(&book_id)
        .await
        .map_err(|e| BookApiError::service(BookOperation::Delete, e))?;

    Ok((StatusCode::OK, Json(SuccessResponse::with_message(MSG_BOOK_DELETED))))
}
