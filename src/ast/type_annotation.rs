use crate::ast::AstNode;
use inherent::inherent;

/// The nullability of a
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References).
///
/// Rather than modeling `NonNullType` as a recursive wrapper (which would
/// admit redundant double-wrapping like `T!!`), nullability is flattened
/// into a flag on each concrete annotation node. `[String!]!` is fully
/// expressible: the inner `String!` is the list's `element_type` with its
/// own `Nullability`, and the outer `!` sits on the list node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nullability {
    NonNull,
    Nullable,
}

/// A GraphQL
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References),
/// as written in variable definitions.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedTypeAnnotation),
    List(ListTypeAnnotation),
}

/// A named type reference (e.g. `String`, `String!`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub name: String,
    pub nullability: Nullability,
}

/// A list type reference (e.g. `[String]`, `[String!]!`). Nesting is
/// unbounded.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub element_type: Box<TypeAnnotation>,
    pub nullability: Nullability,
}

impl TypeAnnotation {
    /// A nullable named type: `T`.
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullability: Nullability::Nullable,
        })
    }

    /// A non-null named type: `T!`.
    pub fn non_null_named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullability: Nullability::NonNull,
        })
    }

    /// A nullable list type: `[T]`.
    pub fn list(element_type: TypeAnnotation) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            element_type: Box::new(element_type),
            nullability: Nullability::Nullable,
        })
    }

    /// A non-null list type: `[T]!`.
    pub fn non_null_list(element_type: TypeAnnotation) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            element_type: Box::new(element_type),
            nullability: Nullability::NonNull,
        })
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            TypeAnnotation::Named(named) => named.nullability,
            TypeAnnotation::List(list) => list.nullability,
        }
    }

    pub fn is_non_null(&self) -> bool {
        self.nullability() == Nullability::NonNull
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            TypeAnnotation::Named(named) => {
                sink.push_str(&named.name);
                if named.nullability == Nullability::NonNull {
                    sink.push('!');
                }
            },
            TypeAnnotation::List(list) => {
                sink.push('[');
                list.element_type.append_source(sink);
                sink.push(']');
                if list.nullability == Nullability::NonNull {
                    sink.push('!');
                }
            },
        }
    }
}
