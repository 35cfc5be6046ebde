/// Errors surfaced while resolving a field or encoding a value at
/// execution time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no field named `{field_name}` on type `{type_name}`")]
    UndefinedField {
        type_name: String,
        field_name: String,
    },

    #[error("`{value}` is not a declared value of enum `{enum_name}`")]
    UndeclaredEnumValue { enum_name: String, value: String },

    /// A resolver-reported failure. Resolvers construct this through
    /// [`ResolveError::failure`] for errors that are theirs to describe.
    #[error("{message}")]
    FieldFailure { message: String },
}

impl ResolveError {
    /// A resolver-side failure with a caller-supplied message.
    pub fn failure(message: impl Into<String>) -> Self {
        ResolveError::FieldFailure {
            message: message.into(),
        }
    }
}
