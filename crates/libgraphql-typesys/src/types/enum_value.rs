use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::EnumValueConfig;
use crate::value::JsonValue;

/// Represents a single value defined on an
/// [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) type_name: String,
    pub(super) value: JsonValue,
}
impl EnumValue {
    pub(crate) fn from_config(type_name: &str, config: &EnumValueConfig) -> Self {
        Self {
            def_location: config.def_location.clone(),
            deprecation_reason: config.deprecation_reason.clone(),
            description: config.description.clone(),
            directives: config.directives.clone(),
            name: config.name.clone(),
            type_name: type_name.to_string(),
            value: config.value.clone(),
        }
    }

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

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    /// The name of this value as it appears on the wire.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) defining this
    /// value.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// The internal representation of this value.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}
