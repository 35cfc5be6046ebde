//! Shared helpers for parser tests: parse-or-panic entry points and AST
//! navigation.

use crate::ast;
use crate::combinator::Input;
use crate::combinator::ParseFailure;
use crate::parse_document;
use crate::parser::type_annotation::type_annotation;
use crate::parser::value::value;

/// Parses a document, panicking with the error on failure.
pub(crate) fn parse(source: &str) -> ast::Document {
    match parse_document(source) {
        Ok(document) => document,
        Err(error) => panic!("expected `{source}` to parse, got: {error}"),
    }
}

/// The first definition, which must be an operation.
pub(crate) fn first_operation(document: &ast::Document) -> &ast::OperationDefinition {
    match document.definitions.first() {
        Some(ast::Definition::Operation(operation)) => operation,
        other => panic!("expected an operation definition, got: {other:?}"),
    }
}

/// The first definition, which must be a fragment.
pub(crate) fn first_fragment(document: &ast::Document) -> &ast::FragmentDefinition {
    match document.definitions.first() {
        Some(ast::Definition::Fragment(fragment)) => fragment,
        other => panic!("expected a fragment definition, got: {other:?}"),
    }
}

/// The first selection, which must be a field.
pub(crate) fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    match selection_set.selections.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected a field selection, got: {other:?}"),
    }
}

/// The value of the first argument on `field`.
pub(crate) fn first_arg_value(field: &ast::Field) -> &ast::Value {
    match field.arguments.first() {
        Some(argument) => &argument.value,
        None => panic!("expected at least one argument on field `{}`", field.name),
    }
}

/// Parses a standalone input value, panicking unless the whole source is
/// consumed.
pub(crate) fn parse_value(source: &str) -> ast::Value {
    match value(Input::new(source)) {
        Ok((rest, parsed)) if rest.is_at_end() => parsed,
        other => panic!("expected `{source}` to parse as a value, got: {other:?}"),
    }
}

/// Runs the value rule on input it must reject.
pub(crate) fn value_failure(source: &str) -> ParseFailure {
    match value(Input::new(source)) {
        Err(failure) => failure,
        Ok((_, parsed)) => panic!("expected `{source}` to fail as a value, got: {parsed:?}"),
    }
}

/// Parses a standalone type reference, panicking unless the whole source
/// is consumed.
pub(crate) fn parse_type(source: &str) -> ast::TypeAnnotation {
    match type_annotation(Input::new(source)) {
        Ok((rest, parsed)) if rest.is_at_end() => parsed,
        other => panic!("expected `{source}` to parse as a type, got: {other:?}"),
    }
}
