//! # Bookshelf Backend
//!
//! A small CRUD HTTP API over a collection of book records.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (validation, BookService)
//!     ↓
//! Storage Layer (BookStorage: SQLite or in-memory)
//! ```
//!
//! This module wires the layers together: it builds the application state
//! from configuration and assembles the axum router.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::domain::BookService;
use crate::io::rest::{book_apis, root_apis};
use crate::storage::{BookStorage, DbConnection, InMemoryBookRepository, SqliteBookRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub book_service: BookService,
}

impl AppState {
    pub fn new(book_service: BookService) -> Self {
        Self { book_service }
    }
}

/// Initialize the backend with the storage selected in `config`
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let storage: Arc<dyn BookStorage> = match config.storage {
        StorageBackend::Sqlite => {
            info!("Setting up database at {}", config.database_url);
            let db_conn = DbConnection::new(&config.database_url).await?;
            Arc::new(SqliteBookRepository::new(db_conn))
        }
        StorageBackend::Memory => {
            info!("Using in-memory book storage; data is lost on restart");
            Arc::new(InMemoryBookRepository::new())
        }
    };

    info!("Setting up domain model");
    let book_service = BookService::new(storage);

    Ok(AppState::new(book_service))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(root_apis::welcome).fallback(root_apis::method_not_allowed),
        )
        .route(
            "/books",
            get(book_apis::list_books)
                .post(book_apis::add_book)
                .fallback(root_apis::not_found),
        )
        .route(
            "/books/:book_id",
            get(book_apis::get_book)
                .put(book_apis::update_book)
                .delete(book_apis::delete_book)
                .fallback(root_apis::not_found),
        )
        .fallback(root_apis::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
