//! Tests for document-level parsing: definitions, operations, fragments,
//! and variable definitions.

use crate::ast;
use crate::ast::OperationKind;
use crate::parse_document;
use crate::tests::utils::first_field;
use crate::tests::utils::first_fragment;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse;
use crate::ParseError;

// =========================================================
// Operation definitions
// =========================================================

/// A keyword-form query with a single field and no name, variables, or
/// directives.
#[test]
fn bare_query_operation() {
    let document = parse("query { user }");
    assert_eq!(document.definitions.len(), 1);

    let operation = first_operation(&document);
    assert_eq!(operation.operation_kind, OperationKind::Query);
    assert_eq!(operation.name, None);
    assert!(operation.variable_definitions.is_empty());
    assert!(operation.directives.is_empty());

    let field = first_field(&operation.selection_set);
    assert_eq!(field.name, "user");
    assert_eq!(field.alias, None);
    assert!(field.arguments.is_empty());
    assert!(field.selection_set.is_none());
}

/// A named operation with a non-null variable, an argument referencing
/// it, and a nested selection set.
#[test]
fn named_operation_with_variables() {
    let document = parse("query GetUser($id: ID!) { user(id: $id) { id } }");

    let operation = first_operation(&document);
    assert_eq!(operation.name.as_deref(), Some("GetUser"));
    assert_eq!(
        operation.variable_definitions,
        vec![ast::VariableDefinition {
            variable: "id".to_string(),
            var_type: ast::TypeAnnotation::non_null_named("ID"),
            default_value: None,
            directives: vec![],
        }],
    );

    let user = first_field(&operation.selection_set);
    assert_eq!(user.name, "user");
    assert_eq!(
        user.arguments,
        vec![ast::Argument {
            name: "id".to_string(),
            value: ast::Value::Variable("id".to_string()),
        }],
    );

    let nested = user
        .selection_set
        .as_ref()
        .unwrap_or_else(|| panic!("expected a nested selection set on `user`"));
    assert_eq!(first_field(nested).name, "id");
}

/// The shorthand form parses as a `Query` with no name.
#[test]
fn shorthand_query() {
    let document = parse("{ user }");

    let operation = first_operation(&document);
    assert_eq!(operation.operation_kind, OperationKind::Query);
    assert_eq!(operation.name, None);
    assert!(operation.variable_definitions.is_empty());
    assert_eq!(first_field(&operation.selection_set).name, "user");
}

#[test]
fn mutation_and_subscription_keywords() {
    let mutation = parse("mutation AddUser { addUser }");
    assert_eq!(
        first_operation(&mutation).operation_kind,
        OperationKind::Mutation,
    );

    let subscription = parse("subscription OnUser { userChanged }");
    assert_eq!(
        first_operation(&subscription).operation_kind,
        OperationKind::Subscription,
    );
}

/// An operation keyword is required before a name: a bare name cannot
/// start a definition.
#[test]
fn keywordless_named_operation_fails() {
    assert!(matches!(
        parse_document("Foo { x }"),
        Err(ParseError::Failure { .. }),
    ));
}

/// Variables require the keyword form; the shorthand alternative only
/// accepts a bare selection set.
#[test]
fn keywordless_operation_with_variables_fails() {
    assert!(matches!(
        parse_document("($x: Int) { f }"),
        Err(ParseError::Failure { .. }),
    ));
}

#[test]
fn operation_directives() {
    let document = parse("query Cached @cached @ttl(seconds: 60) { user }");

    let operation = first_operation(&document);
    assert_eq!(operation.directives.len(), 2);
    assert_eq!(operation.directives[0].name, "cached");
    assert!(operation.directives[0].arguments.is_empty());
    assert_eq!(operation.directives[1].name, "ttl");
    assert_eq!(
        operation.directives[1].arguments,
        vec![ast::Argument {
            name: "seconds".to_string(),
            value: ast::Value::Int(60),
        }],
    );
}

/// Variable definitions accept defaults and directives.
#[test]
fn variable_default_value_and_directives() {
    let document = parse("query Q($first: Int = 10 @bounded(max: 100)) { page }");

    let operation = first_operation(&document);
    let definition = &operation.variable_definitions[0];
    assert_eq!(definition.variable, "first");
    assert_eq!(definition.var_type, ast::TypeAnnotation::named("Int"));
    assert_eq!(definition.default_value, Some(ast::Value::Int(10)));
    assert_eq!(definition.directives.len(), 1);
    assert_eq!(definition.directives[0].name, "bounded");
}

#[test]
fn multiple_variable_definitions() {
    let document = parse("query Q($a: Int, $b: [String!]) { f }");

    let operation = first_operation(&document);
    assert_eq!(operation.variable_definitions.len(), 2);
    assert_eq!(operation.variable_definitions[0].variable, "a");
    assert_eq!(operation.variable_definitions[1].variable, "b");
    assert_eq!(
        operation.variable_definitions[1].var_type,
        ast::TypeAnnotation::list(ast::TypeAnnotation::non_null_named("String")),
    );
}

/// Empty variable-definition parens are not valid.
#[test]
fn empty_variable_definitions_fail() {
    assert!(matches!(
        parse_document("query Q() { f }"),
        Err(ParseError::Failure { .. }),
    ));
}

// =========================================================
// Fragment definitions
// =========================================================

#[test]
fn fragment_definition() {
    let document = parse("fragment UserDetails on User { id name }");

    let fragment = first_fragment(&document);
    assert_eq!(fragment.name, "UserDetails");
    assert_eq!(fragment.type_condition, "User");
    assert!(fragment.directives.is_empty());

    let selections = &fragment.selection_set.selections;
    assert_eq!(selections.len(), 2);
    assert_eq!(first_field(&fragment.selection_set).name, "id");
}

#[test]
fn fragment_definition_with_directives() {
    let document = parse("fragment F on User @internal { id }");
    assert_eq!(first_fragment(&document).directives[0].name, "internal");
}

/// `on` is reserved and cannot name a fragment.
#[test]
fn fragment_named_on_fails() {
    assert!(matches!(
        parse_document("fragment on on Type { x }"),
        Err(ParseError::Failure { .. }),
    ));
}

// =========================================================
// Document shape
// =========================================================

/// Definition order is preserved exactly as written.
#[test]
fn multiple_definitions_preserve_order() {
    let document = parse(
        "query First { a }\n\
         mutation Second { b }\n\
         fragment Third on T { c }",
    );

    assert_eq!(document.definitions.len(), 3);
    match &document.definitions[0] {
        ast::Definition::Operation(operation) => {
            assert_eq!(operation.name.as_deref(), Some("First"))
        },
        other => panic!("expected an operation, got: {other:?}"),
    }
    match &document.definitions[2] {
        ast::Definition::Fragment(fragment) => assert_eq!(fragment.name, "Third"),
        other => panic!("expected a fragment, got: {other:?}"),
    }
}

/// Braces self-delimit, so definitions need no separating whitespace.
#[test]
fn adjacent_shorthand_definitions() {
    let document = parse("{a}{b}");
    assert_eq!(document.definitions.len(), 2);
}

#[test]
fn empty_document_fails() {
    assert!(matches!(
        parse_document(""),
        Err(ParseError::Failure { .. }),
    ));
    assert!(matches!(
        parse_document("  \n\t, "),
        Err(ParseError::Failure { .. }),
    ));
}

// =========================================================
// Ignored tokens
// =========================================================

/// A leading byte-order mark is stripped before parsing.
#[test]
fn leading_bom_is_stripped() {
    let document = parse("\u{feff}query { user }");
    assert_eq!(document.definitions.len(), 1);
}

/// `#` comments are ignored through end-of-line, wherever they appear.
#[test]
fn comments_are_ignored() {
    let document = parse(
        "# leading comment\n\
         query { # inside a selection set\n\
         user }\n\
         # trailing comment",
    );
    assert_eq!(first_field(&first_operation(&document).selection_set).name, "user");
}

/// Commas are insignificant and interchangeable with whitespace.
#[test]
fn commas_are_ignored() {
    let with_commas = parse("query { a, b, c }");
    let without_commas = parse("query { a b c }");
    assert_eq!(with_commas, without_commas);
}
