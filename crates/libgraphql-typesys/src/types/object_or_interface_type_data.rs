use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::FieldConfig;
use crate::types::FieldResolver;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceType;
use crate::types::Thunk;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fields: Thunk<IndexMap<String, Field>>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
    pub(super) resolve_field: Option<FieldResolver>,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(
        name: &str,
        def_location: &loc::SourceLocation,
        description: Option<&str>,
        directives: &[DirectiveAnnotation],
        field_configs: &Thunk<IndexMap<String, FieldConfig>>,
        interface_names: &[String],
        resolve_field: Option<&FieldResolver>,
    ) -> Self {
        let parent_ref = NamedGraphQLTypeRef::new(name, def_location.to_owned());
        let fields = field_configs.map(move |field_configs| {
            field_configs.iter()
                .map(|(field_name, field_config)| (
                    field_name.to_string(),
                    Field::from_config(parent_ref.clone(), field_config),
                ))
                .collect()
        });
        Self {
            def_location: def_location.to_owned(),
            description: description.map(str::to_string),
            directives: directives.to_vec(),
            fields,
            interfaces: interface_names.iter()
                .map(|iface_name| NamedGraphQLTypeRef::new(
                    iface_name,
                    def_location.to_owned(),
                ))
                .collect(),
            name: name.to_string(),
            resolve_field: resolve_field.cloned(),
        }
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }
}

#[inherent]
impl ObjectOrInterfaceType for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get().get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .map(|iface_ref| {
                iface_ref.deref(schema)
                    .expect("type is present in schema")
                    .as_interface()
                    .expect("type is an interface type")
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolve_field(&self) -> Option<&FieldResolver> {
        self.resolve_field.as_ref()
    }
}
