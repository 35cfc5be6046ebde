use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::schema::DeprecationStatus;

/// Metadata for one field of an object type.
///
/// Constructed fluently and handed to
/// [`ObjectTypeBuilder::field`](crate::schema::ObjectTypeBuilder::field)
/// together with the field's resolver. Each setter overwrites any earlier
/// value for that attribute and leaves the rest of the metadata intact.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_status: DeprecationStatus,
    pub parameters: Vec<Parameter>,
    pub type_annotation: TypeAnnotation,
}

impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation_status: DeprecationStatus::Current,
            parameters: Vec::new(),
            type_annotation,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this field deprecated, with an optional reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<impl Into<String>>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }

    /// Appends an accepted parameter. Order is preserved for
    /// introspection.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// Metadata for one parameter accepted by a field.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub description: Option<String>,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_annotation,
            default_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }
}
