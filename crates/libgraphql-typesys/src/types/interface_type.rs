use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::FieldResolver;
use crate::types::InterfaceTypeConfig;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeResolver;
use crate::value::JsonMap;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents a
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(super) config: InterfaceTypeConfig,
    pub(super) data: ObjectOrInterfaceTypeData,
}
impl InterfaceType {
    pub(crate) fn from_config(config: InterfaceTypeConfig) -> Self {
        let data = ObjectOrInterfaceTypeData::new(
            &config.name,
            &config.def_location,
            config.description.as_deref(),
            &config.directives,
            &config.fields,
            &config.interfaces,
            config.resolve_field.as_ref(),
        );
        Self { config, data }
    }

    pub fn extension_locations(&self) -> &[loc::SourceLocation] {
        &self.config.extension_locations
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.data.implements_interface(interface_name)
    }

    pub fn metadata(&self) -> &JsonMap {
        &self.config.metadata
    }

    /// The hook naming the concrete object type of a runtime value, if one
    /// was installed.
    pub fn resolve_type(&self) -> Option<&TypeResolver> {
        self.config.resolve_type.as_ref()
    }

    pub fn to_config(&self) -> InterfaceTypeConfig {
        self.config.clone()
    }
}

#[inherent]
impl ObjectOrInterfaceType for InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.data.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.data.directives()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order (fields from type extensions
    /// follow those of the definition).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    /// The list of [`InterfaceType`]s implemented by this `InterfaceType`.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.data.interfaces(schema)
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn resolve_field(&self) -> Option<&FieldResolver> {
        self.data.resolve_field()
    }
}
