//! Document, definition, operation, and fragment grammar rules.

use crate::ast;
use crate::ast::OperationKind;
use crate::combinator::byte;
use crate::combinator::map;
use crate::combinator::one_of;
use crate::combinator::opt;
use crate::combinator::sep_by1;
use crate::combinator::Input;
use crate::combinator::Parsed;
use crate::combinator::ParseFailure;
use crate::parser::lexical::fragment_name;
use crate::parser::lexical::ignored0;
use crate::parser::lexical::keyword;
use crate::parser::lexical::name;
use crate::parser::selection_set::selection_set;
use crate::parser::selection_set::type_condition;
use crate::parser::type_annotation::type_annotation;
use crate::parser::value::value;

/// The top-level rule: optional leading ignored tokens, one-or-more
/// definitions separated by ignored tokens, optional trailing ignored
/// tokens. Empty input fails.
pub(crate) fn document(input: Input<'_>) -> Parsed<'_, ast::Document> {
    let (input, _) = ignored0(input)?;
    let (input, definitions) = sep_by1(definition, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    Ok((input, ast::Document { definitions }))
}

/// Operations first: they can start with a keyword or directly with `{`.
/// Fragment definitions always start with `fragment`.
pub(crate) fn definition(input: Input<'_>) -> Parsed<'_, ast::Definition> {
    let parsed = one_of((
        map(operation_definition, ast::Definition::Operation),
        map(fragment_definition, ast::Definition::Fragment),
    ))(input);
    match parsed {
        Err(failure) if failure.offset == input.offset() => Err(ParseFailure::new(
            "expected an operation or fragment definition",
            input.offset(),
        )),
        other => other,
    }
}

/// The full form requires the operation keyword; the shorthand form is a
/// bare selection set. An operation with a name or variables but no
/// keyword matches neither alternative and is rejected.
pub(crate) fn operation_definition(input: Input<'_>) -> Parsed<'_, ast::OperationDefinition> {
    one_of((full_operation_definition, shorthand_operation_definition))(input)
}

fn full_operation_definition(input: Input<'_>) -> Parsed<'_, ast::OperationDefinition> {
    let (input, operation_kind) = operation_kind(input)?;
    let (input, _) = ignored0(input)?;
    let (input, name) = opt(name)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, variable_definitions) = opt(variable_definitions)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    let (input, _) = ignored0(input)?;
    let (input, selection_set) = selection_set(input)?;
    Ok((
        input,
        ast::OperationDefinition {
            operation_kind,
            name,
            variable_definitions: variable_definitions.unwrap_or_default(),
            directives,
            selection_set,
        },
    ))
}

fn shorthand_operation_definition(input: Input<'_>) -> Parsed<'_, ast::OperationDefinition> {
    map(selection_set, |selection_set| ast::OperationDefinition {
        operation_kind: OperationKind::Query,
        name: None,
        variable_definitions: Vec::new(),
        directives: Vec::new(),
        selection_set,
    })(input)
}

fn operation_kind(input: Input<'_>) -> Parsed<'_, OperationKind> {
    let (rest, word) = name(input)?;
    let kind = match word.as_str() {
        "query" => OperationKind::Query,
        "mutation" => OperationKind::Mutation,
        "subscription" => OperationKind::Subscription,
        _ => {
            return Err(ParseFailure::new(
                "expected `query`, `mutation`, or `subscription`",
                input.offset(),
            ))
        },
    };
    Ok((rest, kind))
}

pub(crate) fn fragment_definition(input: Input<'_>) -> Parsed<'_, ast::FragmentDefinition> {
    let (input, _) = keyword("fragment")(input)?;
    let (input, _) = ignored0(input)?;
    let (input, name) = fragment_name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, type_condition) = type_condition(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    let (input, _) = ignored0(input)?;
    let (input, selection_set) = selection_set(input)?;
    Ok((
        input,
        ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        },
    ))
}

// =========================================================
// Variable definitions
// =========================================================

fn variable_definitions(input: Input<'_>) -> Parsed<'_, Vec<ast::VariableDefinition>> {
    let (input, _) = byte(b'(')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, definitions) = sep_by1(variable_definition, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b')')(input)?;
    Ok((input, definitions))
}

/// `$name : type`, then an optional `= default` and optional directives.
pub(crate) fn variable_definition(input: Input<'_>) -> Parsed<'_, ast::VariableDefinition> {
    let (input, _) = byte(b'$')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, variable) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b':')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, var_type) = type_annotation(input)?;
    let (input, _) = ignored0(input)?;
    let (input, default_value) = opt(default_value)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, directives) = directives0(input)?;
    Ok((
        input,
        ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
        },
    ))
}

fn default_value(input: Input<'_>) -> Parsed<'_, ast::Value> {
    let (input, _) = byte(b'=')(input)?;
    let (input, _) = ignored0(input)?;
    value(input)
}

// =========================================================
// Directives and arguments
// =========================================================

/// Zero-or-more directive annotations separated by ignored tokens.
pub(crate) fn directives0(input: Input<'_>) -> Parsed<'_, Vec<ast::DirectiveAnnotation>> {
    map(opt(sep_by1(directive, ignored0)), |directives| {
        directives.unwrap_or_default()
    })(input)
}

fn directive(input: Input<'_>) -> Parsed<'_, ast::DirectiveAnnotation> {
    let (input, _) = byte(b'@')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, name) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, arguments) = opt(arguments)(input)?;
    Ok((
        input,
        ast::DirectiveAnnotation {
            name,
            arguments: arguments.unwrap_or_default(),
        },
    ))
}

/// `( name: value … )`. The list is non-empty: `()` is a parse error.
/// Duplicate argument names are preserved in input order.
pub(crate) fn arguments(input: Input<'_>) -> Parsed<'_, Vec<ast::Argument>> {
    let (input, _) = byte(b'(')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, arguments) = sep_by1(argument, ignored0)(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b')')(input)?;
    Ok((input, arguments))
}

fn argument(input: Input<'_>) -> Parsed<'_, ast::Argument> {
    let (input, name) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b':')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, value) = value(input)?;
    Ok((input, ast::Argument { name, value }))
}
