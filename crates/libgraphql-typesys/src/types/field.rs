use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::FieldConfig;
use crate::types::FieldResolver;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::value::JsonMap;
use indexmap::IndexMap;

/// Represents a
/// [field](https://spec.graphql.org/October2021/#FieldsDefinition) defined on
/// an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub struct Field {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) metadata: JsonMap,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) resolve: Option<FieldResolver>,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_config(
        parent_type: NamedGraphQLTypeRef,
        config: &FieldConfig,
    ) -> Self {
        Self {
            def_location: config.def_location.clone(),
            deprecation_reason: config.deprecation_reason.clone(),
            description: config.description.clone(),
            directives: config.directives.clone(),
            metadata: config.metadata.clone(),
            name: config.name.clone(),
            parameters: config.args.iter()
                .map(|(name, arg)| (name.clone(), Parameter::from_config(arg)))
                .collect(),
            parent_type,
            resolve: config.resolve.clone(),
            type_annotation: config.type_annotation.clone(),
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`Field`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// Extension metadata attached by a decorator.
    pub fn metadata(&self) -> &JsonMap {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The [`ObjectType`](crate::types::ObjectType) or
    /// [`InterfaceType`](crate::types::InterfaceType) this field is defined on.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type
            .deref(schema)
            .expect("type is present in schema")
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The per-field resolver, if one was installed.
    pub fn resolver(&self) -> Option<&FieldResolver> {
        self.resolve.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
