use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::NamedDirectiveRef;
use indexmap::IndexMap;

pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed somewhere within a [`GraphQLType`](crate::types::GraphQLType).
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`Directive`] paired with a set of named argument literals.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::Value>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    /// A map from ParameterName -> literal for all arguments passed to this
    /// [`DirectiveAnnotation`], in the order they were written.
    pub fn arguments(&self) -> &IndexMap<String, ast::Value> {
        &self.arguments
    }

    /// The [`Directive`] type for which this annotation refers to.
    pub fn directive_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema Directive> {
        self.directive_ref.deref(schema).ok()
    }

    /// The name of the [`Directive`] type for which this annotation refers to.
    pub fn directive_type_name(&self) -> &str {
        self.directive_ref.name()
    }

    pub fn location(&self) -> &loc::SourceLocation {
        self.directive_ref.ref_location()
    }
}

/// Extracts the `reason` of an `@deprecated` annotation, if one is present.
pub(crate) fn deprecation_reason(
    directives: &[DirectiveAnnotation],
) -> Option<String> {
    let deprecated =
        directives.iter()
            .find(|annot| annot.directive_type_name() == "deprecated")?;
    match deprecated.arguments.get("reason") {
        Some(ast::Value::String(reason)) => Some(reason.to_string()),
        _ => Some(DEFAULT_DEPRECATION_REASON.to_string()),
    }
}
