use crate::ast::is_valid_name;
use crate::ast::Value;
use crate::schema::ResolveError;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Introspectable metadata for a scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarMeta {
    pub name: String,
    pub description: Option<String>,
}

/// A finished scalar type: metadata plus the encoder that turns host
/// values into wire [`Value`]s.
///
/// The encoder is fallible so scalars with a restricted wire domain can
/// reject unrepresentable host values with a typed error.
pub struct ScalarType<THost> {
    meta: ScalarMeta,
    encoder: Box<dyn Fn(&THost) -> std::result::Result<Value, ResolveError> + Send + Sync>,
}

impl<THost> ScalarType<THost> {
    pub fn meta(&self) -> &ScalarMeta {
        &self.meta
    }

    /// Encodes a host value to its wire representation.
    pub fn resolve(&self, host: &THost) -> std::result::Result<Value, ResolveError> {
        (self.encoder)(host)
    }
}

/// Fluent constructor for [`ScalarType`].
pub struct ScalarTypeBuilder {
    name: String,
    description: Option<String>,
}

impl ScalarTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build<THost>(
        self,
        encoder: impl Fn(&THost) -> std::result::Result<Value, ResolveError> + Send + Sync + 'static,
    ) -> Result<ScalarType<THost>> {
        if !is_valid_name(&self.name) {
            return Err(SchemaBuildError::InvalidTypeName { name: self.name });
        }
        Ok(ScalarType {
            meta: ScalarMeta {
                name: self.name,
                description: self.description,
            },
            encoder: Box::new(encoder),
        })
    }
}
