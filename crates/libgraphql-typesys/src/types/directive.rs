use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::ast;
use crate::directive_annotation::DEFAULT_DEPRECATION_REASON;
use crate::loc;
use crate::schema::Schema;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

pub type NamedDirectiveRef = NamedRef<Schema, Directive>;

/// Represents a
/// [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives):
/// either one of the built-in directives or a custom one defined in schema
/// text.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        description: Option<String>,
        locations: Vec<String>,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Custom { def_location, .. } => def_location,
            Self::Deprecated
                | Self::Include
                | Self::Skip
                | Self::SpecifiedBy => &loc::GRAPHQL_BUILTIN,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Custom { description, .. } => description.as_deref(),
            Self::Deprecated =>
                Some("Marks an element of a GraphQL schema as no longer supported."),
            Self::Include =>
                Some("Directs the executor to include this field or fragment only when the `if` argument is true."),
            Self::Skip =>
                Some("Directs the executor to skip this field or fragment when the `if` argument is true."),
            Self::SpecifiedBy =>
                Some("Exposes a URL that specifies the behavior of this scalar."),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }

    /// The arguments this directive accepts, in declaration order.
    pub fn parameters(&self) -> IndexMap<String, Parameter> {
        let builtin_param = |
            name: &str,
            type_annotation: TypeAnnotation,
            default_value: Option<ast::Value>,
        | (name.to_string(), Parameter {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value,
            description: None,
            directives: vec![],
            name: name.to_string(),
            type_annotation,
        });

        match self {
            Self::Custom { params, .. } => params.clone(),
            Self::Deprecated => IndexMap::from([builtin_param(
                "reason",
                TypeAnnotation::named("String", true),
                Some(ast::Value::String(DEFAULT_DEPRECATION_REASON.to_string())),
            )]),
            Self::Include | Self::Skip => IndexMap::from([builtin_param(
                "if",
                TypeAnnotation::named("Boolean", false),
                None,
            )]),
            Self::SpecifiedBy => IndexMap::from([builtin_param(
                "url",
                TypeAnnotation::named("String", false),
                None,
            )]),
        }
    }
}
impl DerefByName for Directive {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Directive, DerefByNameError> {
        schema.directive_defs
            .get(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
