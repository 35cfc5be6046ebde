//! Tests for input-value parsing.

use crate::ast::Value;
use crate::parse_document;
use crate::tests::utils::parse_value;
use crate::tests::utils::value_failure;
use crate::ParseError;

// =========================================================
// Int values
// =========================================================

#[test]
fn int_values() {
    assert_eq!(parse_value("0"), Value::Int(0));
    assert_eq!(parse_value("123"), Value::Int(123));
    assert_eq!(parse_value("-456"), Value::Int(-456));
}

/// The full `i32` range is accepted, including `i32::MIN` whose magnitude
/// exceeds `i32::MAX`.
#[test]
fn int_range_bounds() {
    assert_eq!(parse_value("2147483647"), Value::Int(i32::MAX));
    assert_eq!(parse_value("-2147483648"), Value::Int(i32::MIN));
}

/// Out-of-range integers are a parse failure, not a saturation, and the
/// failure is reported after the digits so no other value alternative can
/// shadow it.
#[test]
fn int_overflow_fails() {
    let failure = value_failure("2147483648");
    assert!(failure.message.contains("32-bit"));

    assert!(matches!(
        parse_document("{ f(x: -2147483649) }"),
        Err(ParseError::Failure { .. }),
    ));
}

/// A bare minus sign is not an integer.
#[test]
fn minus_without_digits_fails() {
    assert!(matches!(
        parse_document("{ f(x: -) }"),
        Err(ParseError::Failure { .. }),
    ));
}

// =========================================================
// String values
// =========================================================

#[test]
fn string_values() {
    assert_eq!(parse_value(r#""""#), Value::String(String::new()));
    assert_eq!(parse_value(r#""hello""#), Value::String("hello".to_string()));
}

/// Escape sequences map to their code points.
#[test]
fn string_escape_sequences() {
    assert_eq!(
        parse_value(r#""hello\nworld""#),
        Value::String("hello\nworld".to_string()),
    );
    assert_eq!(
        parse_value(r#""\"\\\/\b\f\n\r\t""#),
        Value::String("\"\\/\u{0008}\u{000c}\n\r\t".to_string()),
    );
}

#[test]
fn string_multibyte_content() {
    assert_eq!(
        parse_value("\"gr\u{00fc}n \u{2603}\""),
        Value::String("gr\u{00fc}n \u{2603}".to_string()),
    );
}

#[test]
fn invalid_escape_fails() {
    let failure = value_failure(r#""\x""#);
    assert!(failure.message.contains("escape"));
}

#[test]
fn unterminated_string_fails() {
    let failure = value_failure("\"never closed");
    assert!(failure.message.contains("unterminated"));
}

/// Raw line terminators cannot appear inside a quoted string.
#[test]
fn string_with_raw_newline_fails() {
    assert!(matches!(
        parse_document("{ f(x: \"line\nbreak\") }"),
        Err(ParseError::Failure { .. }),
    ));
}

// =========================================================
// Boolean, null, and enum values
// =========================================================

/// `true`, `false`, and `null` always win over the enum alternative.
#[test]
fn boolean_and_null_are_never_enums() {
    assert_eq!(parse_value("true"), Value::Boolean(true));
    assert_eq!(parse_value("false"), Value::Boolean(false));
    assert_eq!(parse_value("null"), Value::Null);
}

#[test]
fn enum_values() {
    assert_eq!(parse_value("NORTH"), Value::Enum("NORTH".to_string()));
    assert_eq!(parse_value("_private"), Value::Enum("_private".to_string()));
}

/// Keyword matching is whole-name: a name that merely starts with `true`
/// is an enum value.
#[test]
fn enum_value_with_keyword_prefix() {
    assert_eq!(parse_value("trueish"), Value::Enum("trueish".to_string()));
    assert_eq!(parse_value("nullable"), Value::Enum("nullable".to_string()));
}

// =========================================================
// Variables
// =========================================================

#[test]
fn variable_values() {
    assert_eq!(parse_value("$id"), Value::Variable("id".to_string()));
}

// =========================================================
// List and object values
// =========================================================

#[test]
fn list_values() {
    assert_eq!(parse_value("[]"), Value::List(vec![]));
    assert_eq!(
        parse_value("[1, 2, 3]"),
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
    );
}

/// Commas between list items are ignored tokens, not separators.
#[test]
fn list_values_without_commas() {
    assert_eq!(parse_value("[1 2 3]"), parse_value("[1, 2, 3]"));
}

#[test]
fn nested_list_values() {
    assert_eq!(
        parse_value("[[1], [], [true]]"),
        Value::List(vec![
            Value::List(vec![Value::Int(1)]),
            Value::List(vec![]),
            Value::List(vec![Value::Boolean(true)]),
        ]),
    );
}

#[test]
fn object_values() {
    assert_eq!(parse_value("{}"), Value::Object(vec![]));
    assert_eq!(
        parse_value(r#"{name: "Ada", age: 36}"#),
        Value::Object(vec![
            ("name".to_string(), Value::String("Ada".to_string())),
            ("age".to_string(), Value::Int(36)),
        ]),
    );
}

/// Object entries preserve written order, duplicates included.
#[test]
fn object_entries_preserve_order_and_duplicates() {
    assert_eq!(
        parse_value("{a: 1, b: 2, a: 3}"),
        Value::Object(vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(3)),
        ]),
    );
}

#[test]
fn deeply_mixed_values() {
    assert_eq!(
        parse_value("{filter: {ids: [$a, $b], active: true}, limit: null}"),
        Value::Object(vec![
            (
                "filter".to_string(),
                Value::Object(vec![
                    (
                        "ids".to_string(),
                        Value::List(vec![
                            Value::Variable("a".to_string()),
                            Value::Variable("b".to_string()),
                        ]),
                    ),
                    ("active".to_string(), Value::Boolean(true)),
                ]),
            ),
            ("limit".to_string(), Value::Null),
        ]),
    );
}

/// Float literals are out of scope and must not half-parse.
#[test]
fn float_literal_is_rejected_at_document_scope() {
    assert!(parse_document("{ f(x: 1.5) }").is_err());
}
