/// Canonical rendering of an AST node back to GraphQL source text.
///
/// Rendering is canonical rather than source-preserving: the parser keeps
/// no spans or trivia, so output uses single-space separation, always
/// prints the operation keyword, and re-escapes string values. The
/// guarantee that matters downstream is semantic: parsing the rendered
/// text produces a tree equal to the one rendered.
pub trait AstNode {
    /// Appends this node's canonical GraphQL text to `sink`.
    fn append_source(&self, sink: &mut String);

    /// This node's canonical GraphQL text as a fresh string.
    fn to_source(&self) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink);
        sink
    }
}
