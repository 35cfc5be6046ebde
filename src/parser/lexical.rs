//! The lexical layer: ignored tokens, names, and keyword matching.
//!
//! These rules back every grammar module but never produce AST nodes of
//! their own.

use crate::ast::is_name_continue_byte;
use crate::ast::is_name_start_byte;
use crate::combinator::byte;
use crate::combinator::byte_if;
use crate::combinator::many0;
use crate::combinator::map;
use crate::combinator::one_of;
use crate::combinator::Input;
use crate::combinator::Parsed;
use crate::combinator::ParseFailure;

fn is_ignored_byte(candidate: u8) -> bool {
    matches!(candidate, b' ' | b'\t' | b'\n' | b'\r' | b',')
}

/// A `#` comment running to end-of-line or end-of-input. The terminating
/// line terminator is left for the surrounding ignored run.
fn comment(input: Input<'_>) -> Parsed<'_, ()> {
    let (mut input, _) = byte(b'#')(input)?;
    while let Some(next) = input.peek() {
        if next == b'\n' || next == b'\r' {
            break;
        }
        input = input.advance(1);
    }
    Ok((input, ()))
}

fn ignored_token(input: Input<'_>) -> Parsed<'_, ()> {
    one_of((
        map(byte_if(is_ignored_byte, "an ignored character"), |_| ()),
        comment,
    ))(input)
}

/// Zero-or-more ignored tokens: spaces, horizontal tabs, line terminators,
/// commas, and `#` comments. Commas are insignificant per the spec.
pub(crate) fn ignored0(input: Input<'_>) -> Parsed<'_, ()> {
    map(many0(ignored_token), |_| ())(input)
}

/// A [Name](https://spec.graphql.org/October2021/#sec-Names):
/// `[_A-Za-z][_A-Za-z0-9]*`, returned as an owned string.
pub(crate) fn name(input: Input<'_>) -> Parsed<'_, String> {
    let start = input;
    let (input, _) = byte_if(is_name_start_byte, "a name")(input)?;
    let (input, _) = many0(byte_if(is_name_continue_byte, "a name character"))(input)?;
    let text = std::str::from_utf8(start.span_to(&input))
        .map_err(|_| ParseFailure::new("name is not valid UTF-8", start.offset()))?;
    Ok((input, text.to_string()))
}

/// A whole name equal to `word`.
///
/// Matching a complete name first keeps keywords from claiming prefixes
/// of longer names: `queryFoo` is a name, never the keyword `query`. On
/// mismatch the failure is reported at the start offset with nothing
/// consumed, so enclosing alternations can fall through.
pub(crate) fn keyword<'src>(word: &'static str) -> impl Fn(Input<'src>) -> Parsed<'src, ()> {
    move |input| {
        let (rest, parsed) = name(input)?;
        if parsed == word {
            Ok((rest, ()))
        } else {
            Err(ParseFailure::new(
                format!("expected `{word}`"),
                input.offset(),
            ))
        }
    }
}

/// A fragment name: any name except `on`.
///
/// Failing at the start offset on `on` lets selection parsing fall
/// through from fragment spreads to inline fragments.
pub(crate) fn fragment_name(input: Input<'_>) -> Parsed<'_, String> {
    let (rest, parsed) = name(input)?;
    if parsed == "on" {
        Err(ParseFailure::new(
            "fragment name must not be `on`",
            input.offset(),
        ))
    } else {
        Ok((rest, parsed))
    }
}
