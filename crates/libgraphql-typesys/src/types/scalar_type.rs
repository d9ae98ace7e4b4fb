use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::types::CoercionError;
use crate::types::ScalarTypeConfig;
use crate::types::SerializationError;
use crate::value;
use crate::value::JsonMap;
use crate::value::JsonValue;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// Coercion goes through the hooks installed on the config. Without hooks,
/// values pass through unchanged and literals are converted structurally.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(super) config: ScalarTypeConfig,
}
impl ScalarType {
    pub(crate) fn from_config(config: ScalarTypeConfig) -> Self {
        Self { config }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.config.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.config.directives
    }

    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    pub fn specified_by_url(&self) -> Option<&str> {
        self.config.specified_by_url.as_deref()
    }

    pub fn parse_literal(
        &self,
        literal: &ast::Value,
        variables: &JsonMap,
    ) -> Result<JsonValue, CoercionError> {
        match &self.config.parse_literal {
            Some(parse_literal) => parse_literal.call(literal, variables),
            None => Ok(value::ast_value_to_json(literal, variables)),
        }
    }

    pub fn parse_value(&self, input: &JsonValue) -> Result<JsonValue, CoercionError> {
        match &self.config.parse_value {
            Some(parse_value) => parse_value.call(input),
            None => Ok(input.clone()),
        }
    }

    pub fn serialize(&self, internal: &JsonValue) -> Result<JsonValue, SerializationError> {
        match &self.config.serialize {
            Some(serialize) => serialize.call(internal),
            None => Ok(internal.clone()),
        }
    }

    pub fn to_config(&self) -> ScalarTypeConfig {
        self.config.clone()
    }
}
