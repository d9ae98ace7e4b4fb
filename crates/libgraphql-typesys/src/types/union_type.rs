use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeResolver;
use crate::types::UnionTypeConfig;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(super) config: UnionTypeConfig,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
}
impl UnionType {
    pub(crate) fn from_config(config: UnionTypeConfig) -> Self {
        let members = config.types.iter()
            .map(|member_name| (
                member_name.to_string(),
                NamedGraphQLTypeRef::new(member_name, config.def_location.to_owned()),
            ))
            .collect();
        Self { config, members }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`UnionType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.config.def_location
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`UnionType`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.config.directives
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// Members added from type extensions follow those of the definition, in
    /// the order they were specified on the extension.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of [`GraphQLType`]s defined as a member of this union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members.values()
            .map(|type_ref| type_ref.deref(schema).expect("type is present in schema"))
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    pub fn resolve_type(&self) -> Option<&TypeResolver> {
        self.config.resolve_type.as_ref()
    }

    pub fn to_config(&self) -> UnionTypeConfig {
        self.config.clone()
    }
}
