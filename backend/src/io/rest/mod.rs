//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints of the bookshelf.
//! This layer handles:
//! - JSON request/response serialization
//! - Query-string decoding into typed filters
//! - Translating domain outcomes into status codes and the
//!   `{status, message, data}` envelope
//! - Request logging
//!
//! No business rules live here; handlers call into `BookService` and map the
//! result.

pub mod book_apis;
pub mod errors;
pub mod mappers;
pub mod root_apis;
