//! A single query selection and its recursive renderer.

use crate::error::QueryError;
use crate::query::{Argument, QueryTree};

/// Indentation added per nesting level, in spaces.
pub const INDENT: usize = 2;

/// A child selection of a [`QueryNode`].
#[derive(Clone, Debug, PartialEq)]
enum SubSelection {
    Node(QueryNode),
    /// Pre-rendered text, spliced in without validation.
    Literal(String),
}

impl SubSelection {
    fn is_blank(&self) -> bool {
        match self {
            Self::Node(_) => false,
            Self::Literal(text) => text.trim().is_empty(),
        }
    }
}

/// One addressable query selection.
///
/// A node names a collection and selects fields, inline fragments
/// (`... on Type { ... }`) and nested sub-queries from it. Fields,
/// arguments, fragment targets and children all render in insertion order.
///
/// If fragment targets are set, the plain field list is rendered inside each
/// fragment instead of directly in the node.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{Argument, QueryNode};
///
/// let node = QueryNode::new("posts")
///     .with_arguments([Argument::new("first", 2)])
///     .with_fields(["id", "title"]);
///
/// assert_eq!(node.render(0), "posts(first: 2) {\n  id,\n  title\n}");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNode {
    collection: String,
    arguments: Vec<Argument>,
    fields: Vec<String>,
    on_targets: Vec<String>,
    include_typename: bool,
    children: Vec<SubSelection>,
}

impl QueryNode {
    /// Creates an empty node for the given collection.
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            arguments: Vec::new(),
            fields: Vec::new(),
            on_targets: Vec::new(),
            include_typename: false,
            children: Vec::new(),
        }
    }

    /// Adds fields to select.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_fields(fields);
        self
    }

    /// Adds arguments.
    #[must_use]
    pub fn with_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = Argument>,
    {
        self.add_arguments(arguments);
        self
    }

    /// Adds every root of `tree` as a nested sub-query.
    #[must_use]
    pub fn with_sub_query(mut self, tree: QueryTree) -> Self {
        self.add_sub_query(tree);
        self
    }

    /// Adds a single nested sub-query.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.add_child(child);
        self
    }

    /// Adds pre-rendered sub-query text. See [`add_literal_sub_query`](Self::add_literal_sub_query).
    #[must_use]
    pub fn with_literal_sub_query(mut self, text: impl Into<String>) -> Self {
        self.add_literal_sub_query(text);
        self
    }

    /// Adds inline fragment targets.
    #[must_use]
    pub fn on<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_on_targets(targets);
        self
    }

    /// Selects `__typename` ahead of the inline fragments.
    #[must_use]
    pub const fn with_typename(mut self) -> Self {
        self.include_typename = true;
        self
    }

    /// Appends fields to select.
    pub fn add_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
    }

    /// Appends arguments.
    pub fn add_arguments<I>(&mut self, arguments: I)
    where
        I: IntoIterator<Item = Argument>,
    {
        self.arguments.extend(arguments);
    }

    /// Appends every root of `tree` as a nested sub-query, in order.
    pub fn add_sub_query(&mut self, tree: QueryTree) {
        self.children
            .extend(tree.into_roots().into_iter().map(SubSelection::Node));
    }

    /// Appends a single nested sub-query.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(SubSelection::Node(child));
    }

    /// Appends pre-rendered sub-query text.
    ///
    /// The text is not validated. When rendered, its common leading
    /// indentation is replaced by the indentation of the sub-query depth.
    pub fn add_literal_sub_query(&mut self, text: impl Into<String>) {
        self.children.push(SubSelection::Literal(text.into()));
    }

    /// Appends inline fragment targets.
    pub fn add_on_targets<I, S>(&mut self, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.on_targets.extend(targets.into_iter().map(Into::into));
    }

    /// Sets whether `__typename` is selected. Only used with fragment targets.
    pub fn set_typename(&mut self, include: bool) {
        self.include_typename = include;
    }

    /// Returns the collection name.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the arguments in insertion order.
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Returns the selected fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the inline fragment targets in insertion order.
    #[must_use]
    pub fn on_targets(&self) -> &[String] {
        &self.on_targets
    }

    /// Returns whether `__typename` is selected ahead of the fragments.
    #[must_use]
    pub const fn includes_typename(&self) -> bool {
        self.include_typename
    }

    /// Returns the structured sub-queries in insertion order.
    pub fn sub_queries(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            SubSelection::Node(node) => Some(node),
            SubSelection::Literal(_) => None,
        })
    }

    /// Returns the literal sub-queries in insertion order.
    pub fn literal_sub_queries(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|child| match child {
            SubSelection::Node(_) => None,
            SubSelection::Literal(text) => Some(text.as_str()),
        })
    }

    /// Validates this node and every structured sub-query beneath it.
    ///
    /// Literal sub-queries are not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingCollection`] if the collection name is
    /// empty, or [`QueryError::MissingFields`] if the node selects no
    /// fields, fragments or sub-queries.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.collection.is_empty() {
            tracing::debug!("Rejecting query node with an empty collection name");
            return Err(QueryError::MissingCollection);
        }

        if !self.has_selection() {
            tracing::debug!(collection = %self.collection, "Rejecting query node with an empty selection");
            return Err(QueryError::MissingFields {
                collection: self.collection.clone(),
            });
        }

        self.sub_queries().try_for_each(Self::validate)
    }

    fn has_selection(&self) -> bool {
        !self.fields.is_empty()
            || !self.on_targets.is_empty()
            || self.children.iter().any(|child| !child.is_blank())
    }

    /// Renders this node and its descendants, starting `indent` spaces deep.
    ///
    /// Rendering does not validate; call [`validate`](Self::validate) first
    /// or use [`QueryTree::build`].
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let depth = indent + INDENT;

        let mut parts = Vec::with_capacity(1 + self.children.len());

        let selection = if self.on_targets.is_empty() {
            self.render_fields(depth)
        } else {
            self.render_fragments(depth)
        };
        if !selection.is_empty() {
            parts.push(selection);
        }

        for child in &self.children {
            match child {
                SubSelection::Node(node) => parts.push(node.render(depth)),
                SubSelection::Literal(text) => {
                    let text = reindent(text, depth);
                    if !text.is_empty() {
                        tracing::trace!(collection = %self.collection, "Splicing literal sub-query");
                        parts.push(text);
                    }
                }
            }
        }

        format!(
            "{pad}{}{} {{\n{}\n{pad}}}",
            self.collection,
            self.render_arguments(),
            parts.join(",\n")
        )
    }

    fn render_arguments(&self) -> String {
        if self.arguments.is_empty() {
            return String::new();
        }
        let arguments: Vec<String> = self.arguments.iter().map(Argument::build).collect();
        format!("({})", arguments.join(", "))
    }

    fn render_fields(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        self.fields
            .iter()
            .map(|field| format!("{pad}{field}"))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    fn render_fragments(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let body = self.render_fields(indent + INDENT);

        let mut lines = Vec::with_capacity(1 + self.on_targets.len());
        if self.include_typename {
            lines.push(format!("{pad}__typename"));
        }
        for target in &self.on_targets {
            if body.is_empty() {
                lines.push(format!("{pad}... on {target} {{\n{pad}}}"));
            } else {
                lines.push(format!("{pad}... on {target} {{\n{body}\n{pad}}}"));
            }
        }
        lines.join("\n")
    }
}

/// Re-indents pre-rendered text so its shallowest line sits `indent` deep.
///
/// Leading and trailing blank lines are dropped; blank lines in between are
/// kept empty.
fn reindent(text: &str, indent: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(start) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .unwrap_or(start);
    let lines = &lines[start..=end];

    let common = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let pad = " ".repeat(indent);
    lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                format!("{pad}{}", &line[common..])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|byte| *byte == b' ' || *byte == b'\t')
        .count()
}

// Verify QueryNode is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryNode>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fields_without_arguments_has_no_parentheses() {
        let node = QueryNode::new("posts").with_fields(["id"]);
        assert_eq!(node.render(2), "  posts {\n    id\n  }");
    }

    #[test]
    fn test_render_arguments_are_comma_space_joined() {
        let node = QueryNode::new("posts")
            .with_arguments([Argument::new("id", 4), Argument::new("author", "Chester")])
            .with_fields(["id", "title"]);
        assert_eq!(
            node.render(0),
            "posts(id: 4, author: \"Chester\") {\n  id,\n  title\n}"
        );
    }

    #[test]
    fn test_render_nested_children_indent_per_level() {
        let author = QueryNode::new("author").with_fields(["firstname"]);
        let comments = QueryNode::new("comments")
            .with_fields(["body"])
            .with_child(author);
        let posts = QueryNode::new("posts")
            .with_fields(["id"])
            .with_child(comments);

        let expected = "posts {\n  id,\n  comments {\n    body,\n    author {\n      firstname\n    }\n  }\n}";
        assert_eq!(posts.render(0), expected);
    }

    #[test]
    fn test_render_fragments_take_precedence_over_plain_fields() {
        let node = QueryNode::new("search")
            .on(["Human", "Droid"])
            .with_fields(["name"]);

        let expected = "search {\n  ... on Human {\n    name\n  }\n  ... on Droid {\n    name\n  }\n}";
        assert_eq!(node.render(0), expected);
    }

    #[test]
    fn test_render_typename_precedes_fragments() {
        let node = QueryNode::new("search")
            .on(["Human"])
            .with_typename()
            .with_fields(["name"]);

        let expected = "search {\n  __typename\n  ... on Human {\n    name\n  }\n}";
        assert_eq!(node.render(0), expected);
    }

    #[test]
    fn test_typename_without_fragments_is_ignored() {
        let node = QueryNode::new("posts").with_typename().with_fields(["id"]);
        assert_eq!(node.render(0), "posts {\n  id\n}");
    }

    #[test]
    fn test_render_node_with_only_sub_queries() {
        let node = QueryNode::new("viewer").with_child(QueryNode::new("login").with_fields(["name"]));
        assert_eq!(node.render(0), "viewer {\n  login {\n    name\n  }\n}");
    }

    #[test]
    fn test_render_literal_sub_query_is_reindented() {
        let node = QueryNode::new("posts")
            .with_fields(["id"])
            .with_literal_sub_query("  comments {\n    body\n  }");
        assert_eq!(
            node.render(2),
            "  posts {\n    id,\n    comments {\n      body\n    }\n  }"
        );
    }

    #[test]
    fn test_render_keeps_structured_and_literal_children_in_order() {
        let node = QueryNode::new("posts")
            .with_fields(["id"])
            .with_literal_sub_query("tags {\n  name\n}")
            .with_child(QueryNode::new("author").with_fields(["name"]));

        let expected = "posts {\n  id,\n  tags {\n    name\n  },\n  author {\n    name\n  }\n}";
        assert_eq!(node.render(0), expected);
    }

    #[test]
    fn test_reindent_strips_outer_blank_lines() {
        assert_eq!(reindent("\n\n    a {\n      b\n    }\n\n", 2), "  a {\n    b\n  }");
        assert_eq!(reindent("   \n", 2), "");
    }

    #[test]
    fn test_reindent_keeps_inner_blank_lines_empty() {
        assert_eq!(reindent("a\n   \nb", 4), "    a\n\n    b");
    }

    #[test]
    fn test_validate_rejects_empty_selection() {
        let result = QueryNode::new("posts").validate();
        assert_eq!(
            result,
            Err(QueryError::MissingFields {
                collection: "posts".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_collection_name() {
        let result = QueryNode::new("").with_fields(["id"]).validate();
        assert_eq!(result, Err(QueryError::MissingCollection));
    }

    #[test]
    fn test_validate_accepts_fragments_or_children_without_fields() {
        assert!(QueryNode::new("search").on(["Human"]).validate().is_ok());
        assert!(QueryNode::new("posts")
            .with_child(QueryNode::new("author").with_fields(["name"]))
            .validate()
            .is_ok());
        assert!(QueryNode::new("posts")
            .with_literal_sub_query("author { name }")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_ignores_blank_literal_sub_query() {
        let result = QueryNode::new("posts").with_literal_sub_query("  \n ").validate();
        assert!(matches!(result, Err(QueryError::MissingFields { .. })));
    }

    #[test]
    fn test_validate_recurses_into_children() {
        let node = QueryNode::new("posts")
            .with_fields(["id"])
            .with_child(QueryNode::new("comments"));
        assert_eq!(
            node.validate(),
            Err(QueryError::MissingFields {
                collection: "comments".to_string()
            })
        );
    }

    #[test]
    fn test_accessors_report_insertion_order() {
        let mut node = QueryNode::new("posts");
        node.add_fields(["b", "a"]);
        node.add_on_targets(["Z", "Y"]);
        node.set_typename(true);
        node.add_literal_sub_query("x { y }");
        node.add_child(QueryNode::new("c").with_fields(["d"]));

        assert_eq!(node.collection(), "posts");
        assert_eq!(node.fields(), ["b", "a"]);
        assert_eq!(node.on_targets(), ["Z", "Y"]);
        assert!(node.includes_typename());
        assert_eq!(node.sub_queries().count(), 1);
        assert_eq!(node.literal_sub_queries().collect::<Vec<_>>(), ["x { y }"]);
    }
}
