use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputValueConfig;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<ast::Value>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    pub(crate) fn from_config(
        parent_type: NamedGraphQLTypeRef,
        config: &InputValueConfig,
    ) -> Self {
        Self {
            def_location: config.def_location.clone(),
            default_value: config.default_value.clone(),
            description: config.description.clone(),
            directives: config.directives.clone(),
            name: config.name.clone(),
            parent_type,
            type_annotation: config.type_annotation.clone(),
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InputField`], in
    /// the order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type
            .deref(schema)
            .expect("type is present in schema")
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
