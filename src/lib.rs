//! A GraphQL toolkit for parsing executable documents (queries, mutations,
//! subscriptions, and fragments) and describing the server-side types they
//! are later matched against.
//!
//! The parser is lexerless: grammar rules are built directly over a
//! byte-indexed input with a small combinator kernel, targeting the
//! executable-document subset of the
//! [October 2021 GraphQL specification](https://spec.graphql.org/October2021/).
//! Parsing a document yields the typed AST in [`ast`]; the [`schema`] module
//! provides the object/enum/scalar description model whose metadata drives
//! validation, execution, and introspection in downstream crates.

pub mod ast;
mod combinator;
mod parse_error;
mod parser;
pub mod schema;

pub use parse_error::ParseError;
pub use parser::parse_document;
