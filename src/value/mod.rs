//! Argument values and their GraphQL literal form.
//!
//! This module provides the closed [`Value`] sum type used for argument
//! values, together with the [`serialize`] and [`escape`] functions that
//! render values as GraphQL input syntax.
//!
//! # Overview
//!
//! Native Rust values map onto [`Value`] variants through `From`
//! conversions, so the variant is decided at construction time:
//!
//! | Rust type | Variant | Rendered as |
//! |-----------|---------|-------------|
//! | `&str`, `String`, `char` | [`Value::String`] | `"escaped text"` |
//! | integers | [`Value::Int`] | `42` |
//! | `f32`, `f64` | [`Value::Float`] | `2.5` |
//! | `bool` | [`Value::Boolean`] | `true` |
//! | `Vec<T>`, `[T; N]` | [`Value::List`] | `[a,b]` |
//! | `IndexMap<String, T>`, `BTreeMap<String, T>` | [`Value::Object`] | `{key: value}` |
//! | `Option<T>` | inner variant or [`Value::Null`] | `null` |
//!
//! Use [`Value::Literal`] (or [`Value::enum_value`] / [`Value::variable`])
//! for text that must be emitted exactly as written.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::Value;
//!
//! let value = Value::from(vec![Value::from("a"), Value::from(1), Value::enum_value("DESC")]);
//! assert_eq!(value.to_string(), r#"["a",1,DESC]"#);
//! ```

mod serialize;

pub use serialize::{escape, serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone};
use indexmap::IndexMap;

/// A GraphQL input value.
///
/// Sequences and mappings hold further `Value`s, so arbitrarily nested input
/// objects can be expressed. Values are built bottom-up and cannot be cyclic.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The GraphQL `null` literal.
    Null,
    /// An integer literal.
    Int(i64),
    /// A float literal.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A string literal. Escaped and quoted on output.
    String(String),
    /// An ordered list literal.
    List(Vec<Value>),
    /// An input object literal. Keys are emitted unquoted in insertion order.
    Object(IndexMap<String, Value>),
    /// Pre-escaped text emitted verbatim. The caller asserts it is valid.
    Literal(String),
}

impl Value {
    /// Creates an enum value, emitted as the bare name.
    ///
    /// ```rust
    /// use graphql_query_builder::Value;
    ///
    /// assert_eq!(Value::enum_value("DESC").to_string(), "DESC");
    /// ```
    #[must_use]
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Literal(name.into())
    }

    /// Creates a variable reference, emitted as `$name`.
    ///
    /// ```rust
    /// use graphql_query_builder::Value;
    ///
    /// assert_eq!(Value::variable("id").to_string(), "$id");
    /// ```
    #[must_use]
    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::Literal(format!("${}", name.as_ref()))
    }

    /// Returns the GraphQL literal form of this value.
    #[must_use]
    pub fn to_graphql(&self) -> String {
        serialize(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond i64 keep their exact decimal text.
impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Literal(value.to_string()), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Literal(value.to_string()), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        // Widening directly would print 0.1f32 as 0.10000000149011612.
        Self::Float(f64::from_str(&value.to_string()).unwrap_or_else(|_| f64::from(value)))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<IndexMap<String, T>> for Value {
    fn from(entries: IndexMap<String, T>) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> FromIterator<(String, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Boolean(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(float) = number.as_f64().filter(|_| !number.is_u64()) {
                    Self::Float(float)
                } else {
                    Self::Literal(number.to_string())
                }
            }
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                Self::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value
where
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::String(value.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_string_conversions_produce_string_variant() {
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from("a".to_string()), Value::String("a".to_string()));
        assert_eq!(Value::from('x'), Value::String("x".to_string()));
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Value::from(4_i32), Value::Int(4));
        assert_eq!(Value::from(4_u8), Value::Int(4));
        assert_eq!(Value::from(-7_i64), Value::Int(-7));
        assert_eq!(Value::from(10_usize), Value::Int(10));
    }

    #[test]
    fn test_u64_beyond_i64_keeps_exact_digits() {
        let value = Value::from(u64::MAX);
        assert_eq!(value.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_f32_conversion_uses_shortest_representation() {
        assert_eq!(Value::from(0.1_f32).to_string(), "0.1");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_array_conversion() {
        assert_eq!(Value::from([1, 2, 3]).to_string(), "[1,2,3]");
    }

    #[test]
    fn test_btree_map_conversion_is_sorted() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), 2);
        entries.insert("a".to_string(), 1);
        assert_eq!(Value::from(entries).to_string(), "{a: 1,b: 2}");
    }

    #[test]
    fn test_collect_into_object_keeps_order() {
        let value: Value = vec![("first".to_string(), 1), ("after".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(value.to_string(), "{first: 1,after: 2}");
    }

    #[test]
    fn test_json_conversion() {
        let value = Value::from(json!({
            "author": "Chester",
            "ids": [1, 2],
            "published": true,
            "rating": 4.5,
            "tag": null
        }));
        assert_eq!(
            value.to_string(),
            r#"{author: "Chester",ids: [1,2],published: true,rating: 4.5,tag: null}"#
        );
    }

    #[test]
    fn test_json_large_unsigned_number() {
        let value = Value::from(json!(u64::MAX));
        assert_eq!(value, Value::Literal("18446744073709551615".to_string()));
    }

    #[test]
    fn test_enum_and_variable_helpers() {
        assert_eq!(Value::enum_value("ASC"), Value::Literal("ASC".to_string()));
        assert_eq!(Value::variable("first").to_string(), "$first");
    }

    #[test]
    fn test_date_conversions() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(Value::from(date).to_string(), r#""2024-01-31""#);

        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 12, 30, 0).unwrap();
        assert_eq!(Value::from(instant).to_string(), r#""2024-01-31T12:30:00Z""#);
    }
}
