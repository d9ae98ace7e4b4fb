use crate::ast;
use crate::execution::PathSegment;
use crate::execution::executor::LinkedPath;
use crate::execution::response::path_to_vec;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::value::JsonMap;
use crate::value::JsonValue;

/// Describes the field being resolved. Handed to every
/// [`FieldResolver`](crate::types::FieldResolver),
/// [`TypeResolver`](crate::types::TypeResolver) and
/// [`IsTypeOf`](crate::types::IsTypeOf) hook.
#[derive(Clone, Copy)]
pub struct ResolveInfo<'a> {
    pub(crate) field_definition: &'a Field,
    pub(crate) field_nodes: &'a [&'a ast::query::Field],
    pub(crate) operation_name: Option<&'a str>,
    pub(crate) parent_type: &'a ObjectType,
    pub(crate) path: LinkedPath<'a>,
    pub(crate) root_value: &'a JsonValue,
    pub(crate) schema: &'a Schema,
    pub(crate) variables: &'a JsonMap,
}
impl<'a> ResolveInfo<'a> {
    pub fn field_definition(&self) -> &'a Field {
        self.field_definition
    }

    pub fn field_name(&self) -> &'a str {
        self.field_definition.name()
    }

    /// Every selection of this field that was merged under one response key.
    pub fn field_nodes(&self) -> &'a [&'a ast::query::Field] {
        self.field_nodes
    }

    pub fn operation_name(&self) -> Option<&'a str> {
        self.operation_name
    }

    /// The object type the field is being resolved on.
    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }

    /// The response path of the field, from the root of `data`.
    pub fn path(&self) -> Vec<PathSegment> {
        path_to_vec(self.path)
    }

    pub fn return_type(&self) -> &'a TypeAnnotation {
        self.field_definition.type_annotation()
    }

    pub fn root_value(&self) -> &'a JsonValue {
        self.root_value
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Coerced variable values of the operation.
    pub fn variables(&self) -> &'a JsonMap {
        self.variables
    }
}
impl std::fmt::Debug for ResolveInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveInfo")
            .field("field_name", &self.field_name())
            .field("parent_type", &self.parent_type.name())
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}
