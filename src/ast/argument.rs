use crate::ast::AstNode;
use crate::ast::Value;
use inherent::inherent;

/// A named value supplied to a field or directive.
///
/// Argument lists preserve their written order, and duplicate names are
/// kept; the grammar permits them and deduplication belongs to validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_source(sink);
    }
}

/// Appends `(a: 1, b: 2)`, or nothing when `arguments` is empty.
pub(crate) fn append_argument_list(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            sink.push_str(", ");
        }
        argument.append_source(sink);
    }
    sink.push(')');
}
