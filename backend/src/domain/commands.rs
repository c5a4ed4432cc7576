//! Domain-level query types.
//! These are used by services inside the domain layer and are **not** exposed
//! over the public API. The REST layer maps the `shared` DTOs to them.

pub mod books {
    /// Typed filters for listing books. `None` disables that dimension.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct BookListFilter {
        /// Case-insensitive substring match on the book name
        pub name: Option<String>,
        pub reading: Option<bool>,
        pub finished: Option<bool>,
    }
}
