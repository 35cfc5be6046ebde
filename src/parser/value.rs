//! Input-value parsing.
//!
//! The alternatives run in a fixed order that keeps prefixes from
//! shadowing each other: variables (`$`) before integers, and boolean and
//! null names before the catch-all enum name. Because boolean/null match
//! whole names, `trueish` parses as the enum value `trueish` rather than
//! `true` followed by garbage.

use crate::ast;
use crate::combinator::and_then;
use crate::combinator::byte;
use crate::combinator::byte_if;
use crate::combinator::many0;
use crate::combinator::many1;
use crate::combinator::map;
use crate::combinator::one_of;
use crate::combinator::opt;
use crate::combinator::sep_by;
use crate::combinator::Input;
use crate::combinator::Parsed;
use crate::combinator::ParseFailure;
use crate::parser::lexical::ignored0;
use crate::parser::lexical::keyword;
use crate::parser::lexical::name;

/// Any input [value](https://spec.graphql.org/October2021/#sec-Input-Values).
///
/// Float literals, block strings, and `\uXXXX` escapes are not
/// implemented.
pub(crate) fn value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    one_of((
        variable_value,
        int_value,
        string_value,
        boolean_value,
        null_value,
        enum_value,
        list_value,
        object_value,
    ))(input)
}

fn variable_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    let (input, _) = byte(b'$')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, variable) = name(input)?;
    Ok((input, ast::Value::Variable(variable)))
}

/// An optional `-` then one-or-more digits, parsed as a signed 32-bit
/// integer. Out-of-range literals fail after the digits, so the failure
/// cannot be shadowed by a later value alternative.
fn int_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    let start = input;
    let (input, _) = opt(byte(b'-'))(input)?;
    let (input, _) = many1(byte_if(|candidate| candidate.is_ascii_digit(), "a digit"))(input)?;
    let text = std::str::from_utf8(start.span_to(&input))
        .map_err(|_| ParseFailure::new("integer literal is not valid UTF-8", start.offset()))?;
    let parsed = text.parse::<i32>().map_err(|_| {
        ParseFailure::new(
            format!("integer literal `{text}` does not fit in a 32-bit Int"),
            input.offset(),
        )
    })?;
    Ok((input, ast::Value::Int(parsed)))
}

fn string_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    map(
        and_then(quoted_string_bytes, |collected| {
            String::from_utf8(collected)
                .map_err(|_| "string literal is not valid UTF-8".to_string())
        }),
        ast::Value::String,
    )(input)
}

/// The raw bytes of a `"…"` literal with escapes resolved.
///
/// A string character is any byte except `"`, `\`, and line terminators,
/// or one of the escapes `\" \\ \/ \b \f \n \r \t`.
fn quoted_string_bytes(input: Input<'_>) -> Parsed<'_, Vec<u8>> {
    let (input, _) = byte(b'"')(input)?;
    let (input, collected) = many0(string_character)(input)?;
    match input.peek() {
        Some(b'"') => Ok((input.advance(1), collected)),
        _ => Err(ParseFailure::new("unterminated string literal", input.offset())),
    }
}

fn string_character(input: Input<'_>) -> Parsed<'_, u8> {
    one_of((
        byte_if(
            |candidate| !matches!(candidate, b'"' | b'\\' | b'\n' | b'\r'),
            "a string character",
        ),
        escape_sequence,
    ))(input)
}

fn escape_sequence(input: Input<'_>) -> Parsed<'_, u8> {
    let (input, _) = byte(b'\\')(input)?;
    match input.peek() {
        Some(b'"') => Ok((input.advance(1), b'"')),
        Some(b'\\') => Ok((input.advance(1), b'\\')),
        Some(b'/') => Ok((input.advance(1), b'/')),
        Some(b'b') => Ok((input.advance(1), 0x08)),
        Some(b'f') => Ok((input.advance(1), 0x0c)),
        Some(b'n') => Ok((input.advance(1), b'\n')),
        Some(b'r') => Ok((input.advance(1), b'\r')),
        Some(b't') => Ok((input.advance(1), b'\t')),
        _ => Err(ParseFailure::new(
            "invalid escape sequence in string literal",
            input.offset(),
        )),
    }
}

fn boolean_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    one_of((
        map(keyword("true"), |_| ast::Value::Boolean(true)),
        map(keyword("false"), |_| ast::Value::Boolean(false)),
    ))(input)
}

fn null_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    map(keyword("null"), |_| ast::Value::Null)(input)
}

fn enum_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    map(name, ast::Value::Enum)(input)
}

fn list_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    let (input, _) = byte(b'[')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, items) = sep_by(value, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b']')(input)?;
    Ok((input, ast::Value::List(items)))
}

fn object_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    let (input, _) = byte(b'{')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, entries) = sep_by(object_entry, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b'}')(input)?;
    Ok((input, ast::Value::Object(entries)))
}

fn object_entry(input: Input<'_>) -> Parsed<'_, (String, ast::Value)> {
    let (input, key) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b':')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, entry_value) = value(input)?;
    Ok((input, (key, entry_value)))
}
