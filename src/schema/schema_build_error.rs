/// Errors raised while finalizing a type description.
///
/// These all indicate programmer error in the schema definition code, not
/// bad user input: builders refuse to produce a type whose metadata could
/// not have come from a valid schema.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("`{name}` is not a valid GraphQL type name")]
    InvalidTypeName { name: String },

    #[error("`{field_name}` on type `{type_name}` is not a valid GraphQL field name")]
    InvalidFieldName {
        type_name: String,
        field_name: String,
    },

    #[error(
        "parameter `{parameter_name}` of field `{field_name}` on type `{type_name}` \
         is not a valid GraphQL name"
    )]
    InvalidParameterName {
        type_name: String,
        field_name: String,
        parameter_name: String,
    },

    #[error("field `{field_name}` is defined more than once on type `{type_name}`")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("object type `{type_name}` defines no fields")]
    ObjectWithNoFields { type_name: String },

    #[error("value `{value_name}` is defined more than once on enum `{enum_name}`")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("enum type `{type_name}` defines no values")]
    EnumWithNoValues { type_name: String },

    #[error("`{value_name}` is not usable as a value of enum `{enum_name}`")]
    InvalidEnumValueName {
        enum_name: String,
        value_name: String,
    },
}
