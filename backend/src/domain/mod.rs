//! # Domain Module
//!
//! Contains the business rules for the bookshelf.
//!
//! ## Module Organization
//!
//! - **models**: the `Book` record, its validated field set and list projection
//! - **validation**: ordered checks turning a raw payload into `BookFields`
//! - **book_service**: add / list / get / update / delete on top of storage
//! - **commands**: internal query types the REST layer maps into
//!
//! ## Business Rules
//!
//! - `finished` is always derived from `readPage == pageCount`
//! - `readPage` can never exceed `pageCount` in a stored record
//! - `id` and `insertedAt` are fixed at creation; `updatedAt` moves on update
//! - Updates replace the full field set, there is no partial patch

pub mod book_service;
pub mod commands;
pub mod models;
pub mod validation;

pub use book_service::*;
