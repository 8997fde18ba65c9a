//! The top-level query document.

use crate::error::QueryError;
use crate::query::{Argument, QueryNode, INDENT};

/// Handle to a root node of a [`QueryTree`].
///
/// Returned by [`QueryTree::add_root`] and [`QueryTree::push`]; every
/// mutating tree method takes the handle of the root it should change.
/// A handle is only meaningful for the tree that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RootId(usize);

impl RootId {
    /// Returns the declaration index of the root.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An ordered sequence of root selections forming one query document.
///
/// Roots render in declaration order inside a single outer `{ }`.
///
/// # Thread Safety
///
/// `QueryTree` is `Send + Sync` but not internally synchronized. Callers
/// sharing a tree across threads must serialize mutation themselves.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{Argument, QueryTree};
///
/// let mut tree = QueryTree::new();
/// let posts = tree.add_root("posts");
/// tree.with_fields(posts, ["id", "title"])?
///     .with_arguments(posts, [Argument::new("first", 10)])?;
///
/// assert_eq!(
///     tree.build()?,
///     "{\n  posts(first: 10) {\n    id,\n    title\n  }\n}"
/// );
/// # Ok::<(), graphql_query_builder::QueryError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryTree {
    roots: Vec<QueryNode>,
}

impl QueryTree {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Appends an empty root for `collection` and returns its handle.
    pub fn add_root(&mut self, collection: impl Into<String>) -> RootId {
        self.push(QueryNode::new(collection))
    }

    /// Appends a fully configured root and returns its handle.
    ///
    /// This is the inline form of adding a root together with its fields,
    /// arguments and sub-queries:
    ///
    /// ```rust
    /// use graphql_query_builder::{Argument, QueryNode, QueryTree};
    ///
    /// let mut tree = QueryTree::new();
    /// tree.push(QueryNode::new("posts").with_fields(["id"]).with_arguments([Argument::new("id", 5)]));
    /// tree.push(QueryNode::new("comments").with_fields(["body"]));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn push(&mut self, node: QueryNode) -> RootId {
        self.roots.push(node);
        RootId(self.roots.len() - 1)
    }

    /// Returns the roots in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[QueryNode] {
        &self.roots
    }

    /// Returns the root for `id`, if it exists.
    #[must_use]
    pub fn root(&self, id: RootId) -> Option<&QueryNode> {
        self.roots.get(id.0)
    }

    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if no root has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the handle of the first root.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if the tree is empty.
    pub fn first_root(&self) -> Result<RootId, QueryError> {
        if self.roots.is_empty() {
            return Err(QueryError::MissingCollection);
        }
        Ok(RootId(0))
    }

    /// Returns the handle of the most recently added root.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if the tree is empty.
    pub fn last_root(&self) -> Result<RootId, QueryError> {
        self.roots
            .len()
            .checked_sub(1)
            .map(RootId)
            .ok_or(QueryError::MissingCollection)
    }

    /// Consumes the tree, returning its roots.
    #[must_use]
    pub fn into_roots(self) -> Vec<QueryNode> {
        self.roots
    }

    /// Adds fields to the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn with_fields<I, S>(&mut self, id: RootId, fields: I) -> Result<&mut Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_mut(id)?.add_fields(fields);
        Ok(self)
    }

    /// Adds arguments to the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn with_arguments<I>(&mut self, id: RootId, arguments: I) -> Result<&mut Self, QueryError>
    where
        I: IntoIterator<Item = Argument>,
    {
        self.root_mut(id)?.add_arguments(arguments);
        Ok(self)
    }

    /// Nests every root of `sub_query` under the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if `sub_query` is empty, or
    /// [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn with_sub_query(&mut self, id: RootId, sub_query: Self) -> Result<&mut Self, QueryError> {
        if sub_query.is_empty() {
            return Err(QueryError::MissingCollection);
        }
        self.root_mut(id)?.add_sub_query(sub_query);
        Ok(self)
    }

    /// Splices pre-rendered sub-query text under the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn with_literal_sub_query(
        &mut self,
        id: RootId,
        text: impl Into<String>,
    ) -> Result<&mut Self, QueryError> {
        self.root_mut(id)?.add_literal_sub_query(text);
        Ok(self)
    }

    /// Adds inline fragment targets to the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn on_fragment_targets<I, S>(&mut self, id: RootId, targets: I) -> Result<&mut Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_mut(id)?.add_on_targets(targets);
        Ok(self)
    }

    /// Selects `__typename` ahead of the inline fragments of the root `id`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] if `id` does not belong to this tree.
    pub fn with_typename(&mut self, id: RootId) -> Result<&mut Self, QueryError> {
        self.root_mut(id)?.set_typename(true);
        Ok(self)
    }

    /// Validates every node of the document in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if the tree is empty, or the
    /// first error reported by [`QueryNode::validate`].
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.roots.is_empty() {
            return Err(QueryError::MissingCollection);
        }
        self.roots.iter().try_for_each(QueryNode::validate)
    }

    /// Validates the document and renders it as GraphQL query text.
    ///
    /// Building does not modify the tree; calling it again yields the same text.
    ///
    /// # Errors
    ///
    /// Returns the first [`QueryError`] found by [`validate`](Self::validate).
    pub fn build(&self) -> Result<String, QueryError> {
        self.validate()?;

        let roots: Vec<String> = self.roots.iter().map(|root| root.render(INDENT)).collect();
        let query = format!("{{\n{}\n}}", roots.join(",\n"));

        tracing::debug!(
            roots = self.roots.len(),
            length = query.len(),
            "Built GraphQL query document"
        );

        Ok(query)
    }

    fn root_mut(&mut self, id: RootId) -> Result<&mut QueryNode, QueryError> {
        let count = self.roots.len();
        self.roots
            .get_mut(id.0)
            .ok_or_else(|| QueryError::InvalidState {
                reason: format!("root #{} does not exist in a document with {count} roots", id.0),
            })
    }
}

// Verify QueryTree is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryTree>();
};
