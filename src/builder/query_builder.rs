//! Fluent query builder.

use crate::error::QueryError;
use crate::query::{Argument, QueryNode, QueryTree};

/// Fluent builder accumulating calls into a [`QueryTree`].
///
/// Field, argument and sub-query calls apply to the most recently added
/// collection. Inline fragment targets and `__typename` apply to the first
/// collection of the document. Use [`QueryTree`] directly to address any
/// root explicitly.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{Argument, QueryBuilder};
///
/// let comments = QueryBuilder::new().from("comments").with_fields(["body"])?;
///
/// let query = QueryBuilder::new()
///     .from("posts")
///     .with_arguments([Argument::new("id", 4)])?
///     .with_fields(["id", "title"])?
///     .with_sub_query(comments)?
///     .build()?;
///
/// assert_eq!(
///     query,
///     "{\n  posts(id: 4) {\n    id,\n    title,\n    comments {\n      body\n    }\n  }\n}"
/// );
/// # Ok::<(), graphql_query_builder::QueryError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuilder {
    tree: QueryTree,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: QueryTree::new(),
        }
    }

    /// Starts a new collection to query.
    #[must_use]
    pub fn from(mut self, collection: impl Into<String>) -> Self {
        self.tree.add_root(collection);
        self
    }

    /// Starts a new collection with its fields, arguments and sub-queries
    /// already configured.
    ///
    /// ```rust
    /// use graphql_query_builder::{Argument, QueryBuilder, QueryNode};
    ///
    /// let query = QueryBuilder::new()
    ///     .from_node(QueryNode::new("posts").with_fields(["id"]).with_arguments([Argument::new("id", 5)]))
    ///     .from_node(QueryNode::new("comments").with_fields(["body"]))
    ///     .build()?;
    ///
    /// assert_eq!(query, "{\n  posts(id: 5) {\n    id\n  },\n  comments {\n    body\n  }\n}");
    /// # Ok::<(), graphql_query_builder::QueryError>(())
    /// ```
    #[must_use]
    pub fn from_node(mut self, node: QueryNode) -> Self {
        self.tree.push(node);
        self
    }

    /// Adds arguments to the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added yet.
    pub fn with_arguments<I>(mut self, arguments: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = Argument>,
    {
        let id = self.tree.last_root()?;
        self.tree.with_arguments(id, arguments)?;
        Ok(self)
    }

    /// Adds fields to the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added yet.
    pub fn with_fields<I, S>(mut self, fields: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.tree.last_root()?;
        self.tree.with_fields(id, fields)?;
        Ok(self)
    }

    /// Nests every collection of `sub_query` under the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added
    /// yet, or if `sub_query` has no collection.
    pub fn with_sub_query(mut self, sub_query: Self) -> Result<Self, QueryError> {
        let id = self.tree.last_root()?;
        self.tree.with_sub_query(id, sub_query.tree)?;
        Ok(self)
    }

    /// Splices pre-rendered sub-query text under the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added yet.
    pub fn with_literal_sub_query(mut self, text: impl Into<String>) -> Result<Self, QueryError> {
        let id = self.tree.last_root()?;
        self.tree.with_literal_sub_query(id, text)?;
        Ok(self)
    }

    /// Queries the first collection through inline fragments on `collections`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added yet.
    pub fn on<I, S>(mut self, collections: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.tree.first_root()?;
        self.tree.on_fragment_targets(id, collections)?;
        Ok(self)
    }

    /// Selects the `__typename` meta field on the first collection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if no collection was added yet.
    pub fn with_typename(mut self) -> Result<Self, QueryError> {
        let id = self.tree.first_root()?;
        self.tree.with_typename(id)?;
        Ok(self)
    }

    /// Builds the query text.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the accumulated document is invalid.
    pub fn build(&self) -> Result<String, QueryError> {
        self.tree.build()
    }

    /// Returns the document built so far.
    #[must_use]
    pub const fn tree(&self) -> &QueryTree {
        &self.tree
    }

    /// Consumes the builder, returning its document.
    #[must_use]
    pub fn into_tree(self) -> QueryTree {
        self.tree
    }
}

impl From<QueryBuilder> for QueryTree {
    fn from(builder: QueryBuilder) -> Self {
        builder.tree
    }
}
