//! Query tree construction and rendering.
//!
//! This module holds the entity model of a query document and the
//! recursive renderer that turns it into GraphQL text.
//!
//! # Overview
//!
//! - [`Argument`]: A `key: value` pair attached to a node
//! - [`QueryNode`]: One selection with its arguments, fields, inline
//!   fragment targets and nested sub-queries
//! - [`QueryTree`]: The ordered root selections of one document; owns
//!   validation and final rendering
//! - [`RootId`]: Handle addressing a root of a [`QueryTree`]
//!
//! # Output Format
//!
//! Documents render with two spaces of indentation per level and one
//! selection per line, separated by `,\n`:
//!
//! ```text
//! {
//!   posts(first: 10) {
//!     id,
//!     title,
//!     comments {
//!       body
//!     }
//!   }
//! }
//! ```

mod argument;
mod node;
mod tree;

pub use argument::Argument;
pub use node::{QueryNode, INDENT};
pub use tree::{QueryTree, RootId};
