use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::InputField;
use crate::types::InputObjectTypeConfig;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Thunk;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(super) config: InputObjectTypeConfig,
    fields: Thunk<IndexMap<String, InputField>>,
}
impl InputObjectType {
    pub(crate) fn from_config(config: InputObjectTypeConfig) -> Self {
        let parent_ref = NamedGraphQLTypeRef::new(
            &config.name,
            config.def_location.to_owned(),
        );
        let fields = config.fields.map(move |field_configs| {
            field_configs.iter()
                .map(|(field_name, field_config)| (
                    field_name.to_string(),
                    InputField::from_config(parent_ref.clone(), field_config),
                ))
                .collect()
        });
        Self { config, fields }
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

    /// A map from FieldName -> [`InputField`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        self.fields.get()
    }

    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    pub fn to_config(&self) -> InputObjectTypeConfig {
        self.config.clone()
    }
}
