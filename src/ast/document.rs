use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// The root of a parsed executable document: one or more definitions, in
/// the order they were written.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

/// One top-level definition of an executable document.
///
/// See
/// [Document](https://spec.graphql.org/October2021/#sec-Document)
/// in the spec. Type-system definitions are out of scope for this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[inherent]
impl AstNode for Document {
    pub fn append_source(&self, sink: &mut String) {
        for (index, definition) in self.definitions.iter().enumerate() {
            if index > 0 {
                sink.push_str("\n\n");
            }
            definition.append_source(sink);
        }
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Definition::Operation(definition) => {
                definition.append_source(sink)
            },
            Definition::Fragment(definition) => {
                definition.append_source(sink)
            },
        }
    }
}
