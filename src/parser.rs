//! The lexerless document parser.
//!
//! Grammar rules are plain functions over the combinator kernel's
//! [`Input`](crate::combinator::Input) state, one module per grammar area.
//! Rules recurse by calling each other directly; there is no token stream
//! and no separate lexing pass. "Ignored" runs (whitespace, commas, `#`
//! comments) are consumed explicitly between tokens by each rule.

pub(crate) mod document;
pub(crate) mod lexical;
pub(crate) mod selection_set;
pub(crate) mod type_annotation;
pub(crate) mod value;

use crate::ast;
use crate::combinator::Input;
use crate::ParseError;

/// Parses a complete executable document.
///
/// A leading U+FEFF byte-order mark is stripped before parsing. The
/// result is the full document AST, or a single [`ParseError`]: either
/// the grammar rejected the input, or it matched a prefix and trailing
/// bytes remained.
///
/// # Example
///
/// ```
/// use graphql_kit::ast;
/// use graphql_kit::parse_document;
///
/// let document = parse_document("query { user }").unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// assert!(matches!(
///     document.definitions[0],
///     ast::Definition::Operation(_),
/// ));
/// ```
pub fn parse_document(source: &str) -> Result<ast::Document, ParseError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    match document::document(Input::new(source)) {
        Err(failure) => Err(ParseError::Failure {
            message: failure.message,
            offset: failure.offset,
        }),
        Ok((rest, document)) => {
            if rest.is_at_end() {
                Ok(document)
            } else {
                Err(ParseError::Incomplete {
                    remainder: String::from_utf8_lossy(rest.remainder()).into_owned(),
                })
            }
        },
    }
}
