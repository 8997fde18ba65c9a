//! Integration tests for argument value serialization.
//!
//! The escaping tests decode the serializer's output with a GraphQL
//! string-literal parser and check that the original text comes back.

use graphql_query_builder::value::{escape, serialize};
use graphql_query_builder::{Argument, Value};

/// Decodes a quoted GraphQL string literal.
fn unescape_graphql_string(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                '/' => out.push('/'),
                'b' => out.push('\u{8}'),
                'f' => out.push('\u{c}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 {
                        return None;
                    }
                    out.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
                }
                _ => return None,
            },
            // Unescaped quotes and line terminators are not allowed inside a literal.
            '"' | '\n' | '\r' => return None,
            c if u32::from(c) < 0x20 && c != '\t' => return None,
            c => out.push(c),
        }
    }

    Some(out)
}

// ============================================================================
// Escaping Law Tests
// ============================================================================

#[test]
fn test_escaped_strings_round_trip() {
    let samples = [
        "",
        "plain",
        "say \"hi\"",
        r"C:\path\to",
        "line one\nline two",
        "tab\tseparated",
        "\r\n",
        "\u{8}\u{c}",
        "Grüße 👻 ümlaut",
        "trailing backslash \\",
        "\\\"",
    ];

    for sample in samples {
        let literal = serialize(&Value::from(sample));
        assert_eq!(
            unescape_graphql_string(&literal).as_deref(),
            Some(sample),
            "round trip failed for {sample:?} via {literal}"
        );
    }
}

#[test]
fn test_every_control_character_round_trips() {
    for code in 0x00_u32..=0x1f {
        let sample: String = ['a', char::from_u32(code).unwrap(), 'b'].iter().collect();
        let literal = serialize(&Value::from(sample.as_str()));

        assert!(
            literal.chars().all(|c| u32::from(c) >= 0x20),
            "control character U+{code:04X} leaked into {literal:?}"
        );
        assert_eq!(unescape_graphql_string(&literal), Some(sample));
    }
}

#[test]
fn test_unicode_escapes_use_lowercase_hex() {
    assert_eq!(escape("\u{1a}"), r"\u001a");
    assert_eq!(escape("\u{0e}\u{1f}"), r"\u000e\u001f");
}

#[test]
fn test_non_ascii_is_not_escaped() {
    assert_eq!(escape("日本語 é 🚀"), "日本語 é 🚀");
}

// ============================================================================
// Structured Value Tests
// ============================================================================

#[test]
fn test_nested_structure_serialization() {
    let value = Value::from(serde_json::json!({
        "and": [
            { "title": { "contains": "Rust" } },
            { "views": { "gt": 100 } }
        ]
    }));

    assert_eq!(
        serialize(&value),
        r#"{and: [{title: {contains: "Rust"}},{views: {gt: 100}}]}"#
    );
}

#[test]
fn test_argument_with_mixed_values() {
    let value = Value::from(vec![
        Value::from(1),
        Value::from(2.5),
        Value::from(false),
        Value::Null,
        Value::enum_value("ASC"),
        Value::from("x"),
    ]);

    assert_eq!(
        Argument::new("values", value).build(),
        r#"values: [1,2.5,false,null,ASC,"x"]"#
    );
}

#[test]
fn test_literal_is_not_escaped() {
    let argument = Argument::new("raw", Value::Literal(r#"{already: "escaped\n"}"#.to_string()));
    assert_eq!(argument.build(), r#"raw: {already: "escaped\n"}"#);
}
