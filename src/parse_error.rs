//! Public error type for document parsing.

/// The single error surfaced by [`parse_document`](crate::parse_document).
///
/// Parsing either rejects the input outright ([`ParseError::Failure`]) or
/// matches a prefix and reports what was left over
/// ([`ParseError::Incomplete`]). There is no error recovery: a document
/// parses completely or not at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grammar rejected the input.
    ///
    /// `offset` is the byte position at which parsing stopped, best-effort:
    /// it points at the most deeply consumed failure the combinator kernel
    /// naturally carried outward.
    #[error("Parse failure: {message} (at byte offset {offset})")]
    Failure { message: String, offset: usize },

    /// The grammar matched a prefix of the input but bytes remained.
    #[error("Incomplete parsing error: {remainder}")]
    Incomplete { remainder: String },
}
