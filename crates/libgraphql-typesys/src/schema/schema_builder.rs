use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeConfigDecorator;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectTypeBuilder;
use crate::types::Parameter;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypeConfig;
use crate::types::TypeGraph;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl GraphQLOperationType {
    /// The name a root type gets when no `schema { .. }` block names one.
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

/// Utility for building a [`Schema`].
///
/// Schema text is loaded with [`SchemaBuilder::load_str`] or
/// [`SchemaBuilder::load_document`], types may also be registered
/// programmatically with [`SchemaBuilder::add_type`], and an optional
/// [`TypeConfigDecorator`] sees every type config before it is materialized.
pub struct SchemaBuilder {
    decorator: Option<Arc<dyn TypeConfigDecorator>>,
    directive_defs: IndexMap<String, Directive>,
    enum_builder: EnumTypeBuilder,
    extending: bool,
    inputobject_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    scalar_builder: ScalarTypeBuilder,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    /// Registers a type defined in code rather than in schema text.
    pub fn add_type(mut self, config: impl Into<TypeConfig>) -> Result<Self> {
        self.types_map_builder.add_new_type(config.into())?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        self.enum_builder.finalize(&mut self.types_map_builder)?;
        self.inputobject_builder.finalize(&mut self.types_map_builder)?;
        self.interface_builder.finalize(&mut self.types_map_builder)?;
        self.object_builder.finalize(&mut self.types_map_builder)?;
        self.scalar_builder.finalize(&mut self.types_map_builder)?;
        self.union_builder.finalize(&mut self.types_map_builder)?;

        tracing::debug!(
            extending = self.extending,
            touched_types = ?self.types_map_builder.touched_type_names(),
            "building schema",
        );

        let types = self.types_map_builder.into_type_graph(self.decorator.as_deref())?;

        let query_type =
            Self::resolve_root_type(&types, GraphQLOperationType::Query, self.query_type.take())?
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            Self::resolve_root_type(&types, GraphQLOperationType::Mutation, self.mutation_type.take())?;
        let subscription_type =
            Self::resolve_root_type(&types, GraphQLOperationType::Subscription, self.subscription_type.take())?;

        let mut implementations: HashMap<String, Vec<String>> = HashMap::new();
        for obj_type in types.iter().filter_map(GraphQLType::as_object) {
            for iface_name in obj_type.interface_names() {
                implementations.entry(iface_name.to_string())
                    .or_default()
                    .push(obj_type.name().to_string());
            }
        }

        Ok(Schema {
            directive_defs: self.directive_defs,
            implementations,
            query_type: query_type.into_type_ref(),
            mutation_type: mutation_type.map(NamedTypeDefLocation::into_type_ref),
            subscription_type: subscription_type.map(NamedTypeDefLocation::into_type_ref),
            types,
        })
    }

    /// Sets the decorator every defined (or extended) type config passes
    /// through before the [`Schema`] is materialized.
    pub fn decorator(mut self, decorator: impl TypeConfigDecorator + 'static) -> Self {
        self.decorator = Some(Arc::new(decorator));
        self
    }

    pub(crate) fn shared_decorator(
        mut self,
        decorator: Option<Arc<dyn TypeConfigDecorator>>,
    ) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn new() -> Self {
        Self::with_types_map_builder(TypesMapBuilder::new())
    }

    /// A builder pre-populated with everything in `base`. Types of `base`
    /// stay untouched (and are carried over as-is) unless the loaded
    /// documents extend them.
    pub(crate) fn from_base(base: &Schema) -> Self {
        let mut builder = Self::with_types_map_builder(
            TypesMapBuilder::from_type_graph(&base.types),
        );
        builder.directive_defs = base.directive_defs.clone();
        builder.extending = true;
        builder.query_type = Some(NamedTypeDefLocation::from_type_ref(&base.query_type));
        builder.mutation_type = base.mutation_type.as_ref().map(NamedTypeDefLocation::from_type_ref);
        builder.subscription_type = base.subscription_type.as_ref().map(NamedTypeDefLocation::from_type_ref);
        builder
    }

    fn with_types_map_builder(types_map_builder: TypesMapBuilder) -> Self {
        Self {
            decorator: None,
            directive_defs: IndexMap::new(),
            enum_builder: EnumTypeBuilder::new(),
            extending: false,
            inputobject_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            query_type: None,
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            scalar_builder: ScalarTypeBuilder::new(),
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder,
            union_builder: UnionTypeBuilder::new(),
        }
    }

    /// Visits every definition of an already-parsed schema document.
    pub fn load_document(mut self, ast_doc: &ast::schema::Document) -> Result<Self> {
        for def in &ast_doc.definitions {
            self.visit_ast_def(None, def.to_owned())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(Some(file_path.as_path()), def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        for (name, directive) in [
            ("skip", Directive::Skip),
            ("include", Directive::Include),
            ("deprecated", Directive::Deprecated),
            ("specifiedBy", Directive::SpecifiedBy),
        ] {
            self.directive_defs.entry(name.to_string()).or_insert(directive);
        }
    }

    fn resolve_root_type(
        types: &TypeGraph,
        operation: GraphQLOperationType,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedTypeDefLocation>> {
        let Some(declared) = declared else {
            let default_name = operation.default_type_name();
            return Ok(match types.lookup(default_name) {
                Some(GraphQLType::Object(obj_type)) => Some(NamedTypeDefLocation {
                    def_location: obj_type.def_location().to_owned(),
                    type_name: default_name.to_string(),
                }),
                _ => None,
            });
        };

        match types.lookup(declared.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(declared)),
            Some(_) | None => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: declared.type_name,
                location: declared.def_location,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::schema(file_path, def.position);

        if builtin_directive_names().contains(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: def_srcloc,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: def_srcloc,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(existing_directive) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                location1: existing_directive.def_location().to_owned(),
                location2: def_srcloc,
            });
        }

        let params = def.arguments.iter().map(|input_val| {
            let param_srcloc = def_srcloc.with_ast_position(&input_val.position);
            (input_val.name.to_string(), Parameter::from_config(
                &TypeBuilderHelpers::input_value_config_from_ast(&param_srcloc, input_val),
            ))
        }).collect();

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location: def_srcloc,
            description: def.description.to_owned(),
            locations: def.locations.iter().map(|l| l.as_str().to_string()).collect(),
            name: def.name.to_string(),
            params,
            repeatable: def.repeatable,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if self.extending {
            return Err(SchemaBuildError::SchemaDefinitionInExtension {
                location: loc::SourceLocation::schema(file_path, schema_def.position),
            });
        }

        for (operation, type_name) in [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let root_types = [
            (GraphQLOperationType::Query, &self.query_type),
            (GraphQLOperationType::Mutation, &self.mutation_type),
            (GraphQLOperationType::Subscription, &self.subscription_type),
        ];
        for (idx, (operation1, type1)) in root_types.iter().enumerate() {
            for (operation2, type2) in &root_types[idx + 1..] {
                let (Some(type1), Some(type2)) = (type1, type2) else {
                    continue;
                };
                if type1.type_name == type2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: type1.type_name.to_owned(),
                        operation1: *operation1,
                        operation1_loc: type1.def_location.to_owned(),
                        operation2: *operation2,
                        operation2_loc: type2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        match type_def {
            ast::schema::TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &enum_def,
                ),

            ast::schema::TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &inputobj_def,
                ),

            ast::schema::TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &iface_def,
                ),

            ast::schema::TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &scalar_def,
                ),

            ast::schema::TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &obj_def,
                ),

            ast::schema::TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("directive_defs", &self.directive_defs.keys())
            .field("extending", &self.extending)
            .field("has_decorator", &self.decorator.is_some())
            .field("types_map_builder", &self.types_map_builder)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{type_name}.{field_name}` field's `{config_field}` comes from \
        schema text and can not be overwritten by a type config decorator"
    )]
    CannotOverwriteFieldConfigField {
        type_name: String,
        field_name: String,
        config_field: String,
    },

    #[error(
        "The `{type_name}` type's `{config_field}` comes from schema text and \
        can not be overwritten by a type config decorator"
    )]
    CannotOverwriteObjectConfigField {
        type_name: String,
        config_field: String,
    },

    #[error("Multiple directives were defined with the name `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines more than one value with the same name")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SourceLocation,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple definitions of the {operation:?} root operation type were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union specifies `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
    },

    #[error("Enum types must define one or more unique values")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "A type config decorator returned the `{type_name}.{field_name}` \
        field, which is not defined in the schema"
    )]
    FieldDoesNotExistInSchema {
        type_name: String,
        field_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field already has a resolver from an \
        earlier pass"
    )]
    FieldResolverAlreadyExists {
        type_name: String,
        field_name: String,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`: `{type_name}.{field_name}({param_name})`")]
    InvalidDunderPrefixedParamName {
        location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type using an extension of a \
        different kind, but `{type_name}` is a {} type",
        type_kind.name(),
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "The {operation:?} root operation type must be an object type, but \
        `{type_name}` is not a defined object type"
    )]
    InvalidRootOperationType {
        operation: GraphQLOperationType,
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("`{type_name}` is not a valid GraphQL name")]
    InvalidTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("{message}")]
    InvariantViolation {
        type_name: String,
        message: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1:?} and {operation2:?} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: GraphQLOperationType,
        operation1_loc: loc::SourceLocation,
        operation2: GraphQLOperationType,
        operation2_loc: loc::SourceLocation,
    },

    #[error(
        "A type config decorator declared that it configures the `{type_name}` \
        type, but no such type is defined or extended"
    )]
    ObjectTypeDoesNotExist {
        type_name: String,
    },

    #[error("Error parsing schema string: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("A `schema` definition can not appear in a schema extension")]
    SchemaDefinitionInExtension {
        location: loc::SourceLocation,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the location of a root operation type's declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: Option<&Path>,
        pos: ast::Pos,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::schema(file, pos),
            type_name,
        }
    }

    fn from_type_ref(type_ref: &NamedGraphQLTypeRef) -> Self {
        Self {
            def_location: type_ref.ref_location().to_owned(),
            type_name: type_ref.name().to_string(),
        }
    }

    fn into_type_ref(self) -> NamedGraphQLTypeRef {
        NamedGraphQLTypeRef::new(self.type_name, self.def_location)
    }
}
