use crate::ast::is_valid_name;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::schema::Field;
use crate::schema::ResolveError;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Argument values for one field invocation, keyed by argument name.
///
/// Insertion order is preserved so executors can report and evaluate
/// arguments in the order the document supplied them.
pub type ArgumentValues = IndexMap<String, Value>;

/// A field resolver: a pure mapping from the parent host value, the
/// coerced argument values, and the field's sub-selection (if any) to a
/// resolved [`Value`] or a typed error.
pub type FieldResolver<TParent> = Box<
    dyn Fn(&TParent, &ArgumentValues, Option<&SelectionSet>) -> std::result::Result<Value, ResolveError>
        + Send
        + Sync,
>;

/// Introspectable metadata for an object type: its name, description, and
/// field descriptions in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMeta {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

impl ObjectMeta {
    /// Looks up one field's metadata by name.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == field_name)
    }
}

/// A finished object type: metadata plus a resolver table keyed by field
/// name.
///
/// The metadata substructure is `Clone` and carries no behavior, so
/// introspection can copy it freely; the resolvers keep their closure
/// captures here, behind field-name dispatch.
pub struct ObjectType<TParent> {
    meta: ObjectMeta,
    resolvers: IndexMap<String, FieldResolver<TParent>>,
}

impl<TParent> ObjectType<TParent> {
    pub fn meta(&self) -> &ObjectMeta {
        &self.meta
    }

    /// Resolves one field against a parent value.
    ///
    /// Unknown field names yield [`ResolveError::UndefinedField`]; the
    /// validator is expected to have rejected such selections already.
    pub fn resolve_field(
        &self,
        parent: &TParent,
        field_name: &str,
        arguments: &ArgumentValues,
        selection_set: Option<&SelectionSet>,
    ) -> std::result::Result<Value, ResolveError> {
        match self.resolvers.get(field_name) {
            Some(resolver) => resolver(parent, arguments, selection_set),
            None => Err(ResolveError::UndefinedField {
                type_name: self.meta.name.clone(),
                field_name: field_name.to_string(),
            }),
        }
    }
}

/// Fluent constructor for [`ObjectType`].
///
/// Each [`field`](Self::field) call appends the field's metadata and
/// registers its resolver in parallel. [`build`](Self::build) validates
/// the accumulated description: names must match the Name grammar, the
/// type must declare at least one field, and field names must be unique —
/// a duplicate is refused outright rather than silently overwritten.
pub struct ObjectTypeBuilder<TParent> {
    name: String,
    description: Option<String>,
    fields: Vec<Field>,
    resolvers: IndexMap<String, FieldResolver<TParent>>,
}

impl<TParent> ObjectTypeBuilder<TParent> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            resolvers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field and its resolver.
    #[must_use]
    pub fn field(
        mut self,
        meta: Field,
        resolver: impl Fn(&TParent, &ArgumentValues, Option<&SelectionSet>) -> std::result::Result<Value, ResolveError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.resolvers
            .insert(meta.name.clone(), Box::new(resolver));
        self.fields.push(meta);
        self
    }

    pub fn build(self) -> Result<ObjectType<TParent>> {
        if !is_valid_name(&self.name) {
            return Err(SchemaBuildError::InvalidTypeName { name: self.name });
        }
        if self.fields.is_empty() {
            return Err(SchemaBuildError::ObjectWithNoFields {
                type_name: self.name,
            });
        }
        for (index, field) in self.fields.iter().enumerate() {
            if !is_valid_name(&field.name) {
                return Err(SchemaBuildError::InvalidFieldName {
                    type_name: self.name,
                    field_name: field.name.clone(),
                });
            }
            for parameter in field.parameters.iter() {
                if !is_valid_name(&parameter.name) {
                    return Err(SchemaBuildError::InvalidParameterName {
                        type_name: self.name,
                        field_name: field.name.clone(),
                        parameter_name: parameter.name.clone(),
                    });
                }
            }
            let duplicated = self.fields[..index]
                .iter()
                .any(|earlier| earlier.name == field.name);
            if duplicated {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    type_name: self.name,
                    field_name: field.name.clone(),
                });
            }
        }
        Ok(ObjectType {
            meta: ObjectMeta {
                name: self.name,
                description: self.description,
                fields: self.fields,
            },
            resolvers: self.resolvers,
        })
    }
}
