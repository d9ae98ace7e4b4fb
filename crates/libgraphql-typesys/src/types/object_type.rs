use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::FieldResolver;
use crate::types::InterfaceType;
use crate::types::IsTypeOf;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectTypeConfig;
use crate::value::JsonMap;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(super) config: ObjectTypeConfig,
    pub(super) data: ObjectOrInterfaceTypeData,
}
impl ObjectType {
    pub(crate) fn from_config(config: ObjectTypeConfig) -> Self {
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

    /// Locations of every `extend type` applied to this type.
    pub fn extension_locations(&self) -> &[loc::SourceLocation] {
        &self.config.extension_locations
    }

    /// Indicates whether this type declares that it implements the named
    /// interface.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.data.implements_interface(interface_name)
    }

    pub fn is_type_of(&self) -> Option<&IsTypeOf> {
        self.config.is_type_of.as_ref()
    }

    pub fn metadata(&self) -> &JsonMap {
        &self.config.metadata
    }

    pub fn to_config(&self) -> ObjectTypeConfig {
        self.config.clone()
    }
}

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.data.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ObjectType`].
    ///
    /// Annotations appear in the order they were written on the definition,
    /// followed by those of each type extension in the order the extensions
    /// were applied.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.data.directives()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// Forces the type's field producer on first access.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    /// The names of all [`InterfaceType`]s implemented by this [`ObjectType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.data.interfaces(schema)
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    /// The type-level fallback resolver used for fields without their own
    /// resolver.
    pub fn resolve_field(&self) -> Option<&FieldResolver> {
        self.data.resolve_field()
    }
}
