use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeConfigDecorator;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Produces a new [`Schema`] from a base schema plus extension documents.
///
/// The base schema is never modified. Types the extension documents neither
/// define nor extend are carried over as-is, sharing their lazily computed
/// bodies with the base. Every other type goes through the optional
/// [`TypeConfigDecorator`] before it is materialized.
///
/// ```ignore
/// let extended = SchemaExtender::new(&base)
///     .load_str(None, "extend type Query { droid(id: ID!): Droid }")?
///     .decorator(resolvers)
///     .extend()?;
/// ```
pub struct SchemaExtender<'a> {
    base: &'a Schema,
    builder: SchemaBuilder,
}
impl<'a> SchemaExtender<'a> {
    pub fn new(base: &'a Schema) -> Self {
        Self {
            base,
            builder: SchemaBuilder::from_base(base),
        }
    }

    pub fn decorator(mut self, decorator: impl TypeConfigDecorator + 'static) -> Self {
        self.builder = self.builder.decorator(decorator);
        self
    }

    pub fn extend(self) -> Result<Schema> {
        let schema = self.builder.build()?;
        tracing::debug!(
            base_types = self.base.types.len(),
            extended_types = schema.types.len(),
            "extended schema",
        );
        Ok(schema)
    }

    pub fn load_document(mut self, ast_doc: &ast::schema::Document) -> Result<Self> {
        self.builder = self.builder.load_document(ast_doc)?;
        Ok(self)
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        self.builder = self.builder.load_str(file_path, content)?;
        Ok(self)
    }

    fn shared_decorator(mut self, decorator: Option<Arc<dyn TypeConfigDecorator>>) -> Self {
        self.builder = self.builder.shared_decorator(decorator);
        self
    }
}
impl std::fmt::Debug for SchemaExtender<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaExtender")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

/// Extends `base` with `extension_ast` and any number of `extra_type_asts`
/// (visited in order, after the extension), passing touched types through
/// `decorator`.
pub fn extend_schema(
    base: &Schema,
    extension_ast: &ast::schema::Document,
    extra_type_asts: &[ast::schema::Document],
    decorator: Option<Arc<dyn TypeConfigDecorator>>,
) -> Result<Schema> {
    let mut extender =
        SchemaExtender::new(base)
            .shared_decorator(decorator)
            .load_document(extension_ast)?;
    for type_ast in extra_type_asts {
        extender = extender.load_document(type_ast)?;
    }
    extender.extend()
}
