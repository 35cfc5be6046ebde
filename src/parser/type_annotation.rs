//! Type-reference parsing for variable definitions.

use crate::ast;
use crate::combinator::byte;
use crate::combinator::map;
use crate::combinator::one_of;
use crate::combinator::opt;
use crate::combinator::Input;
use crate::combinator::Parsed;
use crate::parser::lexical::ignored0;
use crate::parser::lexical::name;

/// A [type reference](https://spec.graphql.org/October2021/#sec-Type-References):
/// a named or list inner, then an optional trailing `!` captured as the
/// node's nullability. List nesting is unbounded.
pub(crate) fn type_annotation(input: Input<'_>) -> Parsed<'_, ast::TypeAnnotation> {
    one_of((list_type_annotation, named_type_annotation))(input)
}

fn named_type_annotation(input: Input<'_>) -> Parsed<'_, ast::TypeAnnotation> {
    let (input, name) = name(input)?;
    let (input, _) = ignored0(input)?;
    let (input, nullability) = nullability(input)?;
    Ok((
        input,
        ast::TypeAnnotation::Named(ast::NamedTypeAnnotation { name, nullability }),
    ))
}

fn list_type_annotation(input: Input<'_>) -> Parsed<'_, ast::TypeAnnotation> {
    let (input, _) = byte(b'[')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, element_type) = type_annotation(input)?;
    let (input, _) = ignored0(input)?;
    let (input, _) = byte(b']')(input)?;
    let (input, _) = ignored0(input)?;
    let (input, nullability) = nullability(input)?;
    Ok((
        input,
        ast::TypeAnnotation::List(ast::ListTypeAnnotation {
            element_type: Box::new(element_type),
            nullability,
        }),
    ))
}

fn nullability(input: Input<'_>) -> Parsed<'_, ast::Nullability> {
    map(opt(byte(b'!')), |bang| match bang {
        Some(_) => ast::Nullability::NonNull,
        None => ast::Nullability::Nullable,
    })(input)
}
