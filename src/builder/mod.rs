//! Builder facades over [`QueryTree`](crate::QueryTree).
//!
//! Two call surfaces produce the same documents:
//!
//! - [`QueryBuilder`]: fluent method chaining, addressing the current
//!   collection implicitly
//! - [`graphql_query`] and the [`graphql_query!`](crate::graphql_query)
//!   macro: a flat list of declarative [`Component`]s
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::builder::{Fields, Root};
//! use graphql_query_builder::{graphql_query, graphql_sub_query, QueryBuilder};
//!
//! let fluent = QueryBuilder::new()
//!     .from("posts")
//!     .with_fields(["id"])?
//!     .with_sub_query(QueryBuilder::new().from("comments").with_fields(["body"])?)?
//!     .build()?;
//!
//! let declarative = graphql_query![
//!     Root::new("posts"),
//!     Fields::new(["id"]),
//!     graphql_sub_query![Root::new("comments"), Fields::new(["body"])]?,
//! ]?;
//!
//! assert_eq!(fluent, declarative);
//! # Ok::<(), graphql_query_builder::QueryError>(())
//! ```

mod declarative;
mod query_builder;

pub use declarative::{graphql_query, Arguments, Component, Fields, On, Root, SubQuery};
pub use query_builder::QueryBuilder;

/// Builds a query document from declarative components of mixed types.
///
/// Expands to a call to [`graphql_query`](crate::builder::graphql_query)
/// and evaluates to `Result<String, QueryError>`.
#[macro_export]
macro_rules! graphql_query {
    ($($component:expr),* $(,)?) => {{
        let components: ::std::vec::Vec<$crate::builder::Component> =
            ::std::vec![$($crate::builder::Component::from($component)),*];
        $crate::builder::graphql_query(components)
    }};
}

/// Builds a [`SubQuery`](crate::builder::SubQuery) from declarative
/// components of mixed types.
///
/// Evaluates to `Result<SubQuery, QueryError>`.
#[macro_export]
macro_rules! graphql_sub_query {
    ($($component:expr),* $(,)?) => {{
        let components: ::std::vec::Vec<$crate::builder::Component> =
            ::std::vec![$($crate::builder::Component::from($component)),*];
        $crate::builder::SubQuery::new(components)
    }};
}
