//! GraphQL literal serialization.
//!
//! Implements the string-value escaping grammar from
//! <https://spec.graphql.org/October2021/#sec-String-Value> and the
//! structural recursion that turns a [`Value`] into GraphQL input syntax.

use std::fmt::Write;

use crate::value::Value;

/// Serializes a value into GraphQL literal syntax.
///
/// This function is total: every [`Value`] has a textual form.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::value::serialize;
/// use graphql_query_builder::Value;
///
/// assert_eq!(serialize(&Value::from("Chester")), r#""Chester""#);
/// assert_eq!(serialize(&Value::from(vec![1, 2])), "[1,2]");
/// ```
#[must_use]
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Escapes the contents of a GraphQL string literal without adding quotes.
///
/// Quotes, backslashes and control characters (U+0000 to U+001F) are escaped.
/// Every other scalar, including non-ASCII text and emoji, passes through.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::value::escape;
///
/// assert_eq!(escape("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// assert_eq!(escape("\u{1b}"), r"\u001b");
/// ```
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    write_escaped(&mut out, input);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Int(number) => {
            let _ = write!(out, "{number}");
        }
        Value::Float(number) => write_float(out, *number),
        Value::Boolean(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::String(text) => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        }
        Value::Literal(text) => out.push_str(text),
    }
}

// GraphQL has no NaN or infinity tokens.
fn write_float(out: &mut String, number: f64) {
    if number.is_finite() {
        let _ = write!(out, "{number:?}");
    } else {
        out.push_str("null");
    }
}

fn write_escaped(out: &mut String, input: &str) {
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0}'..='\u{1f}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            _ => out.push(c),
        }
    }
}
