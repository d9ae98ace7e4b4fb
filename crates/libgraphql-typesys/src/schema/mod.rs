//! Building a [`Schema`] from schema text and extending an existing one.

mod decorated_config_validator;
mod schema;
mod schema_builder;
mod schema_extender;
mod type_config_decorator;
mod type_validation_error;

pub(crate) use decorated_config_validator::DecoratedConfigValidator;
pub use schema::Schema;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_extender::extend_schema;
pub use schema_extender::SchemaExtender;
pub use type_config_decorator::ResolverMap;
pub use type_config_decorator::TypeConfigDecorator;
pub use type_config_decorator::TypeResolvers;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
