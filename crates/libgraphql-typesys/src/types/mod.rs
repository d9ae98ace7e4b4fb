//! The named types of a [`Schema`](crate::Schema), their declarative
//! [`TypeConfig`]s, and the builders that produce those configs from
//! schema-language definitions.

mod builtin_scalars;
mod coercion_error;
mod directive;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod hooks;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod interface_type;
mod interface_type_builder;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod object_type;
mod object_type_builder;
mod parameter;
mod scalar_type;
mod scalar_type_builder;
mod thunk;
mod type_annotation;
mod type_builder;
mod type_config;
mod type_graph;
mod types_map_builder;
mod union_type;
mod union_type_builder;
mod union_type_validator;

pub use builtin_scalars::BuiltinScalar;
pub use coercion_error::CoercionError;
pub use coercion_error::SerializationError;
pub use directive::Directive;
pub use directive::NamedDirectiveRef;
pub use enum_type::EnumType;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use hooks::ContextValue;
pub use hooks::FieldResolver;
pub use hooks::IsTypeOf;
pub use hooks::ScalarLiteralParser;
pub use hooks::ScalarSerializer;
pub use hooks::ScalarValueParser;
pub use hooks::TypeResolver;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_or_interface_type::ObjectOrInterfaceType;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub use thunk::Thunk;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::TypeBuilderHelpers;
pub use type_config::EnumTypeConfig;
pub use type_config::EnumValueConfig;
pub use type_config::FieldConfig;
pub use type_config::InputObjectTypeConfig;
pub use type_config::InputValueConfig;
pub use type_config::InterfaceTypeConfig;
pub use type_config::ObjectTypeConfig;
pub use type_config::ScalarTypeConfig;
pub use type_config::TypeConfig;
pub use type_config::UnionTypeConfig;
pub use type_graph::TypeGraph;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub(crate) use union_type_builder::UnionTypeBuilder;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
