pub mod ast;
pub mod diagnostics;
mod directive_annotation;
mod directive_annotation_builder;
pub mod execution;
pub mod loc;
mod named_ref;
pub mod schema;
mod suggestion;
pub mod types;
pub mod validation;
pub mod value;

pub use directive_annotation::DirectiveAnnotation;
pub(crate) use directive_annotation_builder::DirectiveAnnotationBuilder;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaExtender;
