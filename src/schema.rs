//! The schema description model: metadata plus behavior for the types a
//! server exposes.
//!
//! Types are described once at program start through fluent builders and
//! treated as immutable afterwards. Each built type pairs cheaply
//! cloneable, introspectable metadata ([`ObjectMeta`], [`EnumMeta`],
//! [`ScalarMeta`]) with a parallel table of behavior: field resolvers for
//! object types, an encoder for enum and scalar types. Builders refuse
//! invalid or duplicate names at build time with [`SchemaBuildError`];
//! runtime resolution failures surface as [`ResolveError`].

mod deprecation_status;
mod enum_type;
mod field;
mod object_type;
mod resolve_error;
mod scalar_type;
mod schema_build_error;

pub use deprecation_status::DeprecationStatus;
pub use enum_type::EnumMeta;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeBuilder;
pub use enum_type::EnumValue;
pub use field::Field;
pub use field::Parameter;
pub use object_type::ArgumentValues;
pub use object_type::FieldResolver;
pub use object_type::ObjectMeta;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeBuilder;
pub use resolve_error::ResolveError;
pub use scalar_type::ScalarMeta;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeBuilder;
pub use schema_build_error::SchemaBuildError;

#[cfg(test)]
mod tests;
