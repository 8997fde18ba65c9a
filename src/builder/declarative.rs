//! Declarative query builder.
//!
//! Describes a document as a flat list of [`Component`]s instead of a chain
//! of calls. The [`graphql_query!`](crate::graphql_query) macro accepts any
//! mix of component types.
//!
//! # Assembly Rules
//!
//! - Every [`Root`] starts a collection, carrying its own fields and arguments.
//! - Free [`Fields`] and [`Arguments`] attach to the last collection.
//! - Every [`SubQuery`] is spliced, in order, into the last collection.
//! - [`On`] targets apply to the first collection; `__typename` is selected
//!   if any `On` component asks for it.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::builder::{Arguments, Fields, On, Root};
//! use graphql_query_builder::{graphql_query, Argument};
//!
//! let query = graphql_query![
//!     Root::new("search"),
//!     Arguments::new([Argument::new("text", "an")]),
//!     On::new(["Human", "Droid"]).with_typename(),
//!     Fields::new(["name"]),
//! ]?;
//!
//! assert!(query.starts_with("{\n  search(text: \"an\") {\n    __typename\n"));
//! # Ok::<(), graphql_query_builder::QueryError>(())
//! ```

use crate::builder::QueryBuilder;
use crate::error::QueryError;
use crate::query::{Argument, QueryNode};

/// A collection to query, with optional fields and arguments of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Root {
    collection: String,
    fields: Vec<String>,
    arguments: Vec<Argument>,
}

impl Root {
    /// Creates a root component for `collection`.
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            fields: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Sets the fields selected from this collection.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the arguments of this collection.
    #[must_use]
    pub fn arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = Argument>,
    {
        self.arguments = arguments.into_iter().collect();
        self
    }

    fn into_node(self) -> QueryNode {
        QueryNode::new(self.collection)
            .with_arguments(self.arguments)
            .with_fields(self.fields)
    }
}

/// Fields for the last collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Creates a fields component.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }
}

/// Arguments for the last collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    /// Creates an arguments component.
    #[must_use]
    pub fn new<I>(arguments: I) -> Self
    where
        I: IntoIterator<Item = Argument>,
    {
        Self(arguments.into_iter().collect())
    }
}

/// Inline fragment targets for the first collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct On {
    targets: Vec<String>,
    typename: bool,
}

impl On {
    /// Creates an inline fragment component.
    #[must_use]
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            typename: false,
        }
    }

    /// Also selects the `__typename` meta field.
    #[must_use]
    pub const fn with_typename(mut self) -> Self {
        self.typename = true;
        self
    }
}

/// A nested query described with components, pre-rendered to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubQuery {
    text: String,
}

impl SubQuery {
    /// Builds the nested document and keeps its selections without the
    /// outer braces.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the nested document is invalid.
    pub fn new<I>(components: I) -> Result<Self, QueryError>
    where
        I: IntoIterator,
        I::Item: Into<Component>,
    {
        let document = graphql_query(components)?;
        let lines: Vec<&str> = document.lines().collect();
        let inner = lines.get(1..lines.len().saturating_sub(1)).unwrap_or_default();
        Ok(Self {
            text: inner.join("\n"),
        })
    }

    /// Returns the pre-rendered selection text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Any declarative building block.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// See [`Root`].
    Root(Root),
    /// See [`Fields`].
    Fields(Fields),
    /// See [`Arguments`].
    Arguments(Arguments),
    /// See [`On`].
    On(On),
    /// See [`SubQuery`].
    SubQuery(SubQuery),
}

impl From<Root> for Component {
    fn from(root: Root) -> Self {
        Self::Root(root)
    }
}

impl From<Fields> for Component {
    fn from(fields: Fields) -> Self {
        Self::Fields(fields)
    }
}

impl From<Arguments> for Component {
    fn from(arguments: Arguments) -> Self {
        Self::Arguments(arguments)
    }
}

impl From<On> for Component {
    fn from(on: On) -> Self {
        Self::On(on)
    }
}

impl From<SubQuery> for Component {
    fn from(sub_query: SubQuery) -> Self {
        Self::SubQuery(sub_query)
    }
}

/// Assembles components into a query document and builds it.
///
/// # Errors
///
/// Returns [`QueryError::MissingCollection`] if there is no [`Root`], or
/// any error reported while validating the assembled document.
pub fn graphql_query<I>(components: I) -> Result<String, QueryError>
where
    I: IntoIterator,
    I::Item: Into<Component>,
{
    assemble(components)?.build()
}

fn assemble<I>(components: I) -> Result<QueryBuilder, QueryError>
where
    I: IntoIterator,
    I::Item: Into<Component>,
{
    let mut builder = QueryBuilder::new();
    let mut fields = Vec::new();
    let mut arguments = Vec::new();
    let mut sub_queries = Vec::new();
    let mut on_targets: Option<Vec<String>> = None;
    let mut typename = false;

    for component in components {
        let component: Component = component.into();
        match component {
            Component::Root(root) => builder = builder.from_node(root.into_node()),
            Component::Fields(Fields(names)) => fields.extend(names),
            Component::Arguments(Arguments(values)) => arguments.extend(values),
            Component::On(on) => {
                on_targets.get_or_insert_with(Vec::new).extend(on.targets);
                typename |= on.typename;
            }
            Component::SubQuery(sub_query) => sub_queries.push(sub_query.text),
        }
    }

    if !arguments.is_empty() {
        builder = builder.with_arguments(arguments)?;
    }
    if !fields.is_empty() {
        builder = builder.with_fields(fields)?;
    }
    for text in sub_queries {
        builder = builder.with_literal_sub_query(text)?;
    }
    if let Some(targets) = on_targets {
        builder = builder.on(targets)?;
        if typename {
            builder = builder.with_typename()?;
        }
    }

    Ok(builder)
}
