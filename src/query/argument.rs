//! Field arguments.

use std::fmt;

use crate::value::{serialize, Value};

/// A `key: value` argument attached to a query node.
///
/// Arguments are immutable once constructed. The key is not validated;
/// callers are responsible for passing valid GraphQL names.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::Argument;
///
/// let argument = Argument::new("author", "Chester");
/// assert_eq!(argument.build(), r#"author: "Chester""#);
///
/// let argument = Argument::new("first", 10);
/// assert_eq!(argument.to_string(), "first: 10");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    key: String,
    value: Value,
}

impl Argument {
    /// Creates a new argument from any value convertible into [`Value`].
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the argument key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the argument value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Renders the argument as `key: <serialized value>`.
    #[must_use]
    pub fn build(&self) -> String {
        format!("{}: {}", self.key, serialize(&self.value))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Argument {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
