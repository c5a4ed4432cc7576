//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain logic. Translates
//! requests into domain calls and domain results into JSON responses.

pub mod rest;

pub use rest::*;
