use crate::ast::argument::append_argument_list;
use crate::ast::directive_annotation::append_directive_list;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

// =========================================================
// Operation definitions
// =========================================================

/// An operation definition (query, mutation, or subscription).
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the spec. Shorthand documents parse with `operation_kind` set to
/// [`OperationKind::Query`] and no name.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation_kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

// =========================================================
// Fragment definitions
// =========================================================

/// A named fragment definition.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the spec. The fragment's name may never be `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

// =========================================================
// Variable definitions
// =========================================================

/// One entry of an operation's variable list
/// (e.g. `$id: ID! = "none" @dir`).
///
/// See
/// [Variables](https://spec.graphql.org/October2021/#sec-Language.Variables)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

// =========================================================
// Selection sets
// =========================================================

/// The braced set of selections applied at one object position.
///
/// Invariant: wherever the grammar requires a selection set, it holds at
/// least one selection; `{}` never parses.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

/// A single selection within a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A field selection, optionally aliased, with arguments, directives, and
/// an optional nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
}

/// A named fragment spread (`...FragmentName`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
}

/// An inline fragment (`... on Type { ... }` or `... { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

// =========================================================
// Canonical rendering
// =========================================================

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(self.operation_kind.as_str());
        if let Some(name) = &self.name {
            sink.push(' ');
            sink.push_str(name);
        }
        if !self.variable_definitions.is_empty() {
            sink.push('(');
            for (index, variable_definition) in self.variable_definitions.iter().enumerate() {
                if index > 0 {
                    sink.push_str(", ");
                }
                variable_definition.append_source(sink);
            }
            sink.push(')');
        }
        append_directive_list(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directive_list(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.variable);
        sink.push_str(": ");
        self.var_type.append_source(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink);
        }
        append_directive_list(&self.directives, sink);
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("{ ");
        for (index, selection) in self.selections.iter().enumerate() {
            if index > 0 {
                sink.push(' ');
            }
            selection.append_source(sink);
        }
        sink.push_str(" }");
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Selection::Field(selection) => {
                selection.append_source(sink)
            },
            Selection::FragmentSpread(selection) => {
                selection.append_source(sink)
            },
            Selection::InlineFragment(selection) => {
                selection.append_source(sink)
            },
        }
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_source(&self, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_argument_list(&self.arguments, sink);
        append_directive_list(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            selection_set.append_source(sink);
        }
    }
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directive_list(&self.directives, sink);
    }
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directive_list(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}
