use crate::loc;
use crate::schema::DecoratedConfigValidator;
use crate::schema::SchemaBuildError;
use crate::schema::TypeConfigDecorator;
use crate::types::BuiltinScalar;
use crate::types::GraphQLType;
use crate::types::TypeConfig;
use crate::types::TypeGraph;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A type that is either carried over unchanged from a base schema or was
/// defined/extended in the current pass.
#[derive(Debug)]
enum TypeEntry {
    Base(GraphQLType),
    Touched(TypeConfig),
}

/// Collects the [`TypeConfig`]s produced by the type builders of one build
/// (or extension) pass, and materializes them into a [`TypeGraph`].
#[derive(Debug)]
pub struct TypesMapBuilder {
    entries: IndexMap<String, TypeEntry>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Seeds the builder with every non-builtin type of `base`, untouched.
    pub fn from_type_graph(base: &TypeGraph) -> Self {
        let entries =
            base.iter()
                .filter(|type_| type_.as_builtin_scalar().is_none())
                .map(|type_| (type_.name().to_string(), TypeEntry::Base(type_.clone())))
                .collect();
        Self { entries }
    }

    pub fn add_new_type(&mut self, config: TypeConfig) -> Result<()> {
        let type_name = config.name();

        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: config.def_location().to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if BuiltinScalar::from_name(type_name).is_some() {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: loc::SourceLocation::GraphQLBuiltIn,
                def2: config.def_location().to_owned(),
            });
        }

        if let Some(conflicting_entry) = self.entries.get(type_name) {
            let def1 = match conflicting_entry {
                TypeEntry::Base(type_) => type_.def_location(),
                TypeEntry::Touched(config) => config.def_location(),
            };
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: def1.to_owned(),
                def2: config.def_location().to_owned(),
            });
        }

        self.entries.insert(type_name.to_string(), TypeEntry::Touched(config));
        Ok(())
    }

    /// Looks up the config an extension of `type_name` should be merged into,
    /// marking the type as touched.
    ///
    /// Returns `Ok(None)` when no such type is known (yet).
    pub fn extension_target(
        &mut self,
        type_name: &str,
        extension_location: &loc::SourceLocation,
    ) -> Result<Option<&mut TypeConfig>> {
        if let Some(builtin) = BuiltinScalar::from_name(type_name) {
            return Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                type_kind: builtin.kind(),
                extension_location: extension_location.to_owned(),
            });
        }

        let Some(entry) = self.entries.get_mut(type_name) else {
            return Ok(None);
        };

        if let TypeEntry::Base(type_) = entry {
            // Every non-builtin type can produce its config.
            let config = type_.to_config().ok_or_else(|| {
                SchemaBuildError::InvalidExtensionType {
                    type_name: type_name.to_string(),
                    type_kind: type_.kind(),
                    extension_location: extension_location.to_owned(),
                }
            })?;
            *entry = TypeEntry::Touched(config);
        }

        match entry {
            TypeEntry::Touched(config) => Ok(Some(config)),
            TypeEntry::Base(_) => Ok(None),
        }
    }

    /// Names of the types defined or extended in this pass, in declaration
    /// order.
    pub fn touched_type_names(&self) -> Vec<&str> {
        self.entries.iter()
            .filter(|(_, entry)| matches!(entry, TypeEntry::Touched(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Decorates every touched config, materializes all types and validates
    /// the resulting graph as a whole.
    pub fn into_type_graph(
        self,
        decorator: Option<&dyn TypeConfigDecorator>,
    ) -> Result<TypeGraph> {
        if let Some(decorator) = decorator {
            for type_name in decorator.configured_type_names() {
                match self.entries.get(type_name) {
                    Some(TypeEntry::Touched(_)) => (),
                    Some(TypeEntry::Base(_)) | None =>
                        return Err(SchemaBuildError::ObjectTypeDoesNotExist {
                            type_name: type_name.to_string(),
                        }),
                }
            }
        }

        let mut num_touched = 0;
        let mut graph = TypeGraph::new();
        for (type_name, entry) in self.entries {
            let type_ = match entry {
                TypeEntry::Base(type_) => type_,
                TypeEntry::Touched(config) => {
                    num_touched += 1;
                    let config = match decorator {
                        Some(decorator) => {
                            let decorated = decorator.decorate(config.clone());
                            DecoratedConfigValidator::new(
                                &config,
                                &decorated,
                                &decorator.configured_field_names(&type_name),
                            ).validate()?;
                            decorated
                        },
                        None => config,
                    };
                    GraphQLType::from_config(config)
                },
            };
            graph.register_type(type_)?;
        }

        tracing::debug!(
            num_types = graph.len(),
            num_touched,
            "materialized type graph",
        );

        graph.validate()?;
        Ok(graph)
    }
}
