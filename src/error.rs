//! Error types for query document construction.
//!
//! All fallible builder operations and [`QueryTree::build`](crate::QueryTree::build)
//! return `Result<T, QueryError>`. These errors describe invalid use of the
//! builder API (a programmer error), not runtime conditions worth retrying.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{QueryError, QueryTree};
//!
//! let result = QueryTree::new().build();
//! assert!(matches!(result, Err(QueryError::MissingCollection)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a query document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No collection to operate on.
    ///
    /// Returned when an operation targets "the current root" before any root
    /// was added, when `build()` is called on an empty document, or when a
    /// node has an empty collection name.
    #[error("Missing collection. Add a root collection (e.g. with `from` or `add_root`) before configuring or building the query.")]
    MissingCollection,

    /// A node selects nothing.
    #[error("Collection '{collection}' selects nothing. Add fields, inline fragment targets or sub-queries.")]
    MissingFields {
        /// The collection that has an empty selection.
        collection: String,
    },

    /// The tree is structurally inconsistent.
    #[error("Invalid query state: {reason}")]
    InvalidState {
        /// Why the state is invalid.
        reason: String,
    },
}
