use crate::ast::is_valid_name;
use crate::ast::Value;
use crate::schema::DeprecationStatus;
use crate::schema::ResolveError;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Metadata for one declared value (case) of an enum type.
///
/// The name doubles as the wire representation; setters follow the same
/// overwrite-one-attribute contract as
/// [`Field`](crate::schema::Field)'s.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_status: DeprecationStatus,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this value deprecated, with an optional reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<impl Into<String>>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }
}

/// Introspectable metadata for an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumMeta {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

impl EnumMeta {
    /// Looks up one declared value's metadata by name.
    pub fn value(&self, value_name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == value_name)
    }
}

/// A finished enum type: metadata plus the encoder that maps host runtime
/// values onto declared cases.
pub struct EnumType<THost> {
    meta: EnumMeta,
    encoder: Box<dyn Fn(&THost) -> String + Send + Sync>,
}

impl<THost> EnumType<THost> {
    pub fn meta(&self) -> &EnumMeta {
        &self.meta
    }

    /// Encodes a host value to its wire representation,
    /// `Value::Enum(case_name)`.
    ///
    /// An encoder output that names no declared case yields
    /// [`ResolveError::UndeclaredEnumValue`].
    pub fn resolve(&self, host: &THost) -> std::result::Result<Value, ResolveError> {
        let case_name = (self.encoder)(host);
        if self.meta.value(&case_name).is_none() {
            return Err(ResolveError::UndeclaredEnumValue {
                enum_name: self.meta.name.clone(),
                value: case_name,
            });
        }
        Ok(Value::Enum(case_name))
    }
}

/// Fluent constructor for [`EnumType`].
///
/// Cases accumulate in declaration order; [`build`](Self::build) closes
/// the type by supplying the host-value encoder and validates the
/// accumulated description: names must match the Name grammar, the enum
/// must declare at least one case, case names must be unique, and no case
/// may be named `true`, `false`, or `null`.
pub struct EnumTypeBuilder {
    name: String,
    description: Option<String>,
    values: Vec<EnumValue>,
}

impl EnumTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a fully-described case.
    #[must_use]
    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }

    /// Appends a bare case by name.
    #[must_use]
    pub fn case(self, name: impl Into<String>) -> Self {
        self.value(EnumValue::new(name))
    }

    pub fn build<THost>(
        self,
        encoder: impl Fn(&THost) -> String + Send + Sync + 'static,
    ) -> Result<EnumType<THost>> {
        if !is_valid_name(&self.name) {
            return Err(SchemaBuildError::InvalidTypeName { name: self.name });
        }
        if self.values.is_empty() {
            return Err(SchemaBuildError::EnumWithNoValues {
                type_name: self.name,
            });
        }
        for (index, value) in self.values.iter().enumerate() {
            let reserved = matches!(value.name.as_str(), "true" | "false" | "null");
            if reserved || !is_valid_name(&value.name) {
                return Err(SchemaBuildError::InvalidEnumValueName {
                    enum_name: self.name,
                    value_name: value.name.clone(),
                });
            }
            let duplicated = self.values[..index]
                .iter()
                .any(|earlier| earlier.name == value.name);
            if duplicated {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: self.name,
                    value_name: value.name.clone(),
                });
            }
        }
        Ok(EnumType {
            meta: EnumMeta {
                name: self.name,
                description: self.description,
                values: self.values,
            },
            encoder: Box::new(encoder),
        })
    }
}
