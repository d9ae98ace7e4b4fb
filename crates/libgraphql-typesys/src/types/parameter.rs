use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::types::InputValueConfig;
use crate::types::TypeAnnotation;

/// Represents an argument declared on a [`Field`](crate::types::Field) or
/// on a [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<ast::Value>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_config(config: &InputValueConfig) -> Self {
        Self {
            def_location: config.def_location.clone(),
            default_value: config.default_value.clone(),
            description: config.description.clone(),
            directives: config.directives.clone(),
            name: config.name.clone(),
            type_annotation: config.type_annotation.clone(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The literal used when no argument is passed.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
