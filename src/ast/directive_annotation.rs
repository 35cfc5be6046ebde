use crate::ast::argument::append_argument_list;
use crate::ast::Argument;
use crate::ast::AstNode;
use inherent::inherent;

/// A `@name(args)` annotation.
///
/// The grammar accepts directives uniformly at every standard executable
/// position: operations, variable definitions, fields, fragment spreads,
/// inline fragments, and fragment definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_argument_list(&self.arguments, sink);
    }
}

/// Appends ` @a @b(x: 1)` — each directive preceded by a space — or
/// nothing when `directives` is empty.
pub(crate) fn append_directive_list(directives: &[DirectiveAnnotation], sink: &mut String) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink);
    }
}
