use crate::types::FieldConfig;
use crate::types::FieldResolver;
use crate::types::IsTypeOf;
use crate::types::TypeConfig;
use crate::types::TypeResolver;
use indexmap::IndexMap;

/// Augments [`TypeConfig`]s while a schema is built or extended.
///
/// [`decorate`](TypeConfigDecorator::decorate) is invoked once for every type
/// defined or extended in the current pass, in declaration order, and must
/// return a config of the same kind and name. It may attach behavior
/// (`resolve`, `resolve_field`, `resolve_type`, `is_type_of`, scalar hooks,
/// enum internal values and `metadata`) but may not alter anything that
/// schema text declared.
///
/// Any `Fn(TypeConfig) -> TypeConfig` is a decorator.
pub trait TypeConfigDecorator: Send + Sync {
    fn decorate(&self, config: TypeConfig) -> TypeConfig;

    /// Types this decorator expects to see. Naming a type that is neither
    /// defined nor extended in the pass is an error.
    fn configured_type_names(&self) -> Vec<&str> {
        vec![]
    }

    /// Fields of `type_name` this decorator expects to exist.
    fn configured_field_names(&self, _type_name: &str) -> Vec<&str> {
        vec![]
    }
}
impl<F> TypeConfigDecorator for F
where
    F: Fn(TypeConfig) -> TypeConfig + Send + Sync,
{
    fn decorate(&self, config: TypeConfig) -> TypeConfig {
        self(config)
    }
}

/// The behavior a [`ResolverMap`] attaches to one type.
#[derive(Clone, Debug, Default)]
pub struct TypeResolvers {
    pub fields: IndexMap<String, FieldResolver>,
    pub is_type_of: Option<IsTypeOf>,
    pub resolve_field: Option<FieldResolver>,
    pub resolve_type: Option<TypeResolver>,
}

/// A [`TypeConfigDecorator`] that installs resolvers keyed by type name (and
/// field name).
///
/// ```ignore
/// let resolvers = ResolverMap::new()
///     .field("Query", "hero", FieldResolver::new(|_, _, _, _| Ok(json!({"name": "R2-D2"}))))
///     .resolve_type("Character", TypeResolver::new(|value, _, _| {
///         value.get("primaryFunction").map(|_| "Droid".to_string())
///     }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResolverMap {
    types: IndexMap<String, TypeResolvers>,
}
impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        self.types.entry(type_name.into())
            .or_default()
            .fields
            .insert(field_name.into(), resolver);
        self
    }

    pub fn is_type_of(mut self, type_name: impl Into<String>, is_type_of: IsTypeOf) -> Self {
        self.types.entry(type_name.into()).or_default().is_type_of = Some(is_type_of);
        self
    }

    pub fn resolve_field(
        mut self,
        type_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        self.types.entry(type_name.into()).or_default().resolve_field = Some(resolver);
        self
    }

    pub fn resolve_type(
        mut self,
        type_name: impl Into<String>,
        resolver: TypeResolver,
    ) -> Self {
        self.types.entry(type_name.into()).or_default().resolve_type = Some(resolver);
        self
    }

    pub fn type_resolvers(&self, type_name: &str) -> Option<&TypeResolvers> {
        self.types.get(type_name)
    }

    fn with_field_resolvers(
        fields: &IndexMap<String, FieldConfig>,
        resolvers: &IndexMap<String, FieldResolver>,
    ) -> IndexMap<String, FieldConfig> {
        fields.iter().map(|(field_name, field)| {
            let mut field = field.to_owned();
            if let Some(resolver) = resolvers.get(field_name) {
                field.resolve = Some(resolver.to_owned());
            }
            (field_name.to_owned(), field)
        }).collect()
    }
}
impl TypeConfigDecorator for ResolverMap {
    fn decorate(&self, config: TypeConfig) -> TypeConfig {
        let Some(resolvers) = self.types.get(config.name()) else {
            return config;
        };

        match config {
            TypeConfig::Object(mut obj_config) => {
                if !resolvers.fields.is_empty() {
                    let field_resolvers = resolvers.fields.to_owned();
                    obj_config.fields = obj_config.fields.map(move |fields| {
                        Self::with_field_resolvers(fields, &field_resolvers)
                    });
                }
                if let Some(is_type_of) = &resolvers.is_type_of {
                    obj_config.is_type_of = Some(is_type_of.to_owned());
                }
                if let Some(resolve_field) = &resolvers.resolve_field {
                    obj_config.resolve_field = Some(resolve_field.to_owned());
                }
                TypeConfig::Object(obj_config)
            },

            TypeConfig::Interface(mut iface_config) => {
                if !resolvers.fields.is_empty() {
                    let field_resolvers = resolvers.fields.to_owned();
                    iface_config.fields = iface_config.fields.map(move |fields| {
                        Self::with_field_resolvers(fields, &field_resolvers)
                    });
                }
                if let Some(resolve_field) = &resolvers.resolve_field {
                    iface_config.resolve_field = Some(resolve_field.to_owned());
                }
                if let Some(resolve_type) = &resolvers.resolve_type {
                    iface_config.resolve_type = Some(resolve_type.to_owned());
                }
                TypeConfig::Interface(iface_config)
            },

            TypeConfig::Union(mut union_config) => {
                if let Some(resolve_type) = &resolvers.resolve_type {
                    union_config.resolve_type = Some(resolve_type.to_owned());
                }
                TypeConfig::Union(union_config)
            },

            TypeConfig::Enum(_)
                | TypeConfig::InputObject(_)
                | TypeConfig::Scalar(_) => config,
        }
    }

    fn configured_type_names(&self) -> Vec<&str> {
        self.types.keys().map(|name| name.as_str()).collect()
    }

    fn configured_field_names(&self, type_name: &str) -> Vec<&str> {
        self.types.get(type_name)
            .map(|resolvers| resolvers.fields.keys().map(|name| name.as_str()).collect())
            .unwrap_or_default()
    }
}
