//! Selection-set grammar rules: fields, fragment spreads, and inline
//! fragments.

use crate::ast;
use crate::combinator::byte;
use crate::combinator::literal;
use crate::combinator::one_of;
use crate::combinator::opt;
use crate::combinator::sep_by1;
use crate::combinator::Input;
use crate::combinator::Parsed;
use crate::combinator::ParseFailure;
use crate::parser::document::arguments;
use crate::parser::document::directives0;
use crate::parser::lexical::fragment_name;
use crate::parser::lexical::ignored0;
use crate::parser::lexical::keyword;
use crate::parser::lexical::name;

/// `{ selection … }`. The set is non-empty: `{}` is a parse error.
pub(crate) fn selection_set(input: Input<'_>) -> Parsed<'_, ast::SelectionSet> {
    let (input, _) = byte(b'{')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, selections) = sep_by1(selection, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b'}')(input)?;
    Ok((input, ast::SelectionSet { selections }))
}

pub(crate) fn selection(input: Input<'_>) -> Parsed<'_, ast::Selection> {
    let parsed = one_of((fragment_selection, field_selection))(input);
    match parsed {
        Err(failure) if failure.offset == input.offset() => Err(ParseFailure::new(
            "expected a field, fragment spread, or inline fragment",
            input.offset(),
        )),
        other => other,
    }
}

/// Both fragment forms share the leading `...`, so it is factored out and
/// the tails are tried in order. The spread tail runs first; its
/// fragment-name rule fails without consuming on `on` (and on `{` or
/// `@`), letting the inline-fragment tail take over.
fn fragment_selection(input: Input<'_>) -> Parsed<'_, ast::Selection> {
    let (input, _) = literal("...")(input)?;
    let (input, _) = ignored0(input)?;
    one_of((fragment_spread_tail, inline_fragment_tail))(input)
}

fn fragment_spread_tail(input: Input<'_>) -> Parsed<'_, ast::Selection> {
    let (input, name) = fragment_name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    Ok((
        input,
        ast::Selection::FragmentSpread(ast::FragmentSpread { name, directives }),
    ))
}

fn inline_fragment_tail(input: Input<'_>) -> Parsed<'_, ast::Selection> {
    let (input, type_condition) = opt(type_condition)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    let (input, _) = ignored0(input)?;
    let (input, selection_set) = selection_set(input)?;
    Ok((
        input,
        ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
        }),
    ))
}

/// `on Name`, shared with fragment definitions.
pub(crate) fn type_condition(input: Input<'_>) -> Parsed<'_, String> {
    let (input, _) = keyword("on")(input)?;
    let (input, _) = ignored0(input)?;
    name(input)
}

/// A field: `alias: name(arguments) @directives { selections }`, where
/// everything but the name is optional. When two names separated by `:`
/// appear, the first is the alias; `foo:` with no following name fails.
fn field_selection(input: Input<'_>) -> Parsed<'_, ast::Selection> {
    let (input, first) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, aliased) = opt(alias_tail)(input)?;
    let (alias, name) = match aliased {
        Some(actual) => (Some(first), actual),
        None => (None, first),
    };
    let (input, _) = ignored0(input)?;
    let (input, arguments) = opt(arguments)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    let (input, _) = ignored0(input)?;
    let (input, selection_set) = opt(selection_set)(input)?;
    Ok((
        input,
        ast::Selection::Field(ast::Field {
            alias,
            name,
            arguments: arguments.unwrap_or_default(),
            directives,
            selection_set,
        }),
    ))
}

fn alias_tail(input: Input<'_>) -> Parsed<'_, String> {
    let (input, _) = byte(b':')(input)?;
    let (input, _) = ignored0(input)?;
    name(input)
}
