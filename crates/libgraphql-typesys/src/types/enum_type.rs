use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::suggestion;
use crate::types::CoercionError;
use crate::types::EnumTypeConfig;
use crate::types::EnumValue;
use crate::types::SerializationError;
use crate::types::Thunk;
use crate::types::type_graph::is_valid_name;
use crate::value;
use crate::value::JsonMap;
use crate::value::JsonValue;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
///
/// Values are produced lazily from the type's config. Lookups by name and by
/// internal value go through tables built on first use.
#[derive(Clone, Debug)]
pub struct EnumType {
    pub(super) config: EnumTypeConfig,
    name_lookup: Arc<OnceLock<HashMap<String, usize>>>,
    value_lookup: Arc<OnceLock<HashMap<String, usize>>>,
    values: Thunk<Vec<EnumValue>>,
}
impl EnumType {
    pub(crate) fn from_config(config: EnumTypeConfig) -> Self {
        let type_name = config.name.clone();
        let values = config.values.map(move |value_configs| {
            value_configs.iter()
                .map(|value_config| EnumValue::from_config(&type_name, value_config))
                .collect()
        });
        Self {
            config,
            name_lookup: Arc::new(OnceLock::new()),
            value_lookup: Arc::new(OnceLock::new()),
            values,
        }
    }

    /// Forces the values producer and checks the result: at least one value,
    /// every name well-formed, no name defined twice.
    pub(crate) fn assert_valid(&self) -> Result<()> {
        let values = self.values();
        if values.is_empty() {
            return Err(self.invariant_violation(
                "must define one or more values".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for value in values {
            let name = value.name();
            if !is_valid_name(name) || matches!(name, "true" | "false" | "null") {
                return Err(self.invariant_violation(format!(
                    "has an invalid value name `{name}`",
                )));
            }
            if !seen.insert(name) {
                return Err(self.invariant_violation(format!(
                    "can include value `{name}` only once",
                )));
            }
        }
        Ok(())
    }

    fn invariant_violation(&self, message: String) -> SchemaBuildError {
        SchemaBuildError::InvariantViolation {
            type_name: self.config.name.to_string(),
            message: format!("Enum `{}` {message}", self.config.name),
        }
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

    /// Looks a value up by its name.
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        let index = self.name_lookup().get(name)?;
        self.values().get(*index)
    }

    /// Looks a value up by its internal representation. When several values
    /// share one internal representation, the first declared one is returned.
    pub fn value_for_internal(&self, internal: &JsonValue) -> Option<&EnumValue> {
        let lookup = self.value_lookup.get_or_init(|| {
            let mut lookup = HashMap::new();
            for (index, enum_value) in self.values().iter().enumerate() {
                lookup.entry(value::canonical_key(enum_value.value())).or_insert(index);
            }
            lookup
        });
        let index = lookup.get(&value::canonical_key(internal))?;
        self.values().get(*index)
    }

    /// All values, in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        self.values.get().as_slice()
    }

    /// Maps an internal value to the name of the enum value it represents.
    pub fn serialize(
        &self,
        internal: &JsonValue,
    ) -> std::result::Result<JsonValue, SerializationError> {
        match self.value_for_internal(internal) {
            Some(value) => Ok(JsonValue::String(value.name().to_string())),
            None => Err(SerializationError::new(format!(
                "Cannot serialize value as enum: {}",
                value::print_json(internal),
            ))),
        }
    }

    /// Maps a runtime input (a value name) to its internal value.
    pub fn parse_value(
        &self,
        input: &JsonValue,
    ) -> std::result::Result<JsonValue, CoercionError> {
        let JsonValue::String(name) = input else {
            return Err(CoercionError::new(format!(
                "Enum \"{}\" cannot represent non-string value: {}.",
                self.name(),
                value::print_json(input),
            )));
        };
        match self.value(name) {
            Some(value) => Ok(value.value().clone()),
            None => Err(CoercionError::new(format!(
                "Value \"{name}\" does not exist in \"{}\" enum.{}",
                self.name(),
                self.did_you_mean(name),
            ))),
        }
    }

    /// Maps an enum literal to its internal value.
    pub fn parse_literal(
        &self,
        literal: &ast::Value,
        _variables: &JsonMap,
    ) -> std::result::Result<JsonValue, CoercionError> {
        let ast::Value::Enum(name) = literal else {
            let printed = value::print_ast_value(literal);
            return Err(CoercionError::new(format!(
                "Enum \"{}\" cannot represent non-enum value: {printed}.{}",
                self.name(),
                self.did_you_mean(&printed),
            )));
        };
        match self.value(name) {
            Some(value) => Ok(value.value().clone()),
            None => Err(CoercionError::new(format!(
                "Value \"{name}\" does not exist in \"{}\" enum.{}",
                self.name(),
                self.did_you_mean(name),
            ))),
        }
    }

    fn did_you_mean(&self, unknown: &str) -> String {
        let suggestions = suggestion::suggestion_list(
            unknown,
            self.values().iter().map(|value| value.name()),
        );
        suggestion::did_you_mean(Some("the enum value"), &suggestions)
    }

    fn name_lookup(&self) -> &HashMap<String, usize> {
        self.name_lookup.get_or_init(|| {
            let mut lookup = HashMap::new();
            for (index, value) in self.values().iter().enumerate() {
                lookup.entry(value.name().to_string()).or_insert(index);
            }
            lookup
        })
    }

    pub fn to_config(&self) -> EnumTypeConfig {
        self.config.clone()
    }
}
