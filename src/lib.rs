//! # GraphQL Query Builder
//!
//! Assembles GraphQL query documents from typed builder calls, guaranteeing
//! that the emitted text is well-formed and that argument values are
//! correctly escaped.
//!
//! ## Overview
//!
//! This crate provides:
//! - The query entity model: [`QueryTree`], [`QueryNode`] and [`Argument`]
//! - A closed [`Value`] type for argument values with GraphQL
//!   string-literal escaping
//! - Handle-based addressing of root selections via [`RootId`]
//! - A fluent [`QueryBuilder`] facade
//! - A declarative facade via [`graphql_query!`] and [`builder::Component`]
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_query_builder::{Argument, QueryBuilder};
//!
//! let query = QueryBuilder::new()
//!     .from("posts")
//!     .with_arguments([Argument::new("author", "Chester")])?
//!     .with_fields(["id", "title"])?
//!     .build()?;
//!
//! assert_eq!(
//!     query,
//!     "{\n  posts(author: \"Chester\") {\n    id,\n    title\n  }\n}"
//! );
//! # Ok::<(), graphql_query_builder::QueryError>(())
//! ```
//!
//! ## Addressing Roots Explicitly
//!
//! [`QueryTree`] hands out a [`RootId`] for every root, so documents
//! with several root collections can be configured in any order:
//!
//! ```rust
//! use graphql_query_builder::QueryTree;
//!
//! let mut tree = QueryTree::new();
//! let posts = tree.add_root("posts");
//! let search = tree.add_root("search");
//!
//! tree.with_fields(search, ["name"])?
//!     .on_fragment_targets(search, ["Human", "Droid"])?
//!     .with_fields(posts, ["id"])?;
//!
//! let query = tree.build()?;
//! assert!(query.contains("... on Droid {"));
//! # Ok::<(), graphql_query_builder::QueryError>(())
//! ```
//!
//! ## Argument Values
//!
//! ```rust
//! use graphql_query_builder::{Argument, Value};
//! use serde_json::json;
//!
//! let filter = Argument::new("filter", json!({ "author": ["Chester"], "published": true }));
//! assert_eq!(filter.build(), r#"filter: {author: ["Chester"],published: true}"#);
//!
//! let order = Argument::new("orderBy", Value::enum_value("DESC"));
//! assert_eq!(order.build(), "orderBy: DESC");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Every document is an owned value
//! - **Fail-fast validation**: `build()` returns a complete document or the
//!   first error found
//! - **Insertion order**: Roots, fields, arguments, fragments and
//!   sub-queries render in the order they were declared
//! - **Not internally synchronized**: Types are `Send + Sync`; callers
//!   serialize mutation when sharing across threads

pub mod builder;
pub mod error;
pub mod query;
pub mod value;

pub use builder::{graphql_query, QueryBuilder};
pub use error::QueryError;
pub use query::{Argument, QueryNode, QueryTree, RootId};
pub use value::Value;
