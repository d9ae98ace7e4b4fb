//! Executing operations against a [`Schema`](crate::Schema) and producing a
//! [GraphQL response](https://spec.graphql.org/October2021/#sec-Response).

mod abstract_type_resolver;
mod executor;
mod field_error;
mod input_coercion;
mod resolve_info;
mod response;

pub use abstract_type_resolver::AbstractTypeResolutionError;
pub use abstract_type_resolver::resolve_abstract_type;
pub use executor::Executor;
pub use field_error::FieldError;
pub use resolve_info::ResolveInfo;
pub use response::GraphQLError;
pub use response::GraphQLLocation;
pub use response::PathSegment;
pub use response::Response;

#[cfg(test)]
mod tests;
