use crate::DirectiveAnnotationBuilder;
use crate::ast;
use crate::directive_annotation::deprecation_reason;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::FieldConfig;
use crate::types::InputValueConfig;
use crate::types::Thunk;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::value::JsonMap;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Turns the definitions and extensions of one kind of type into
/// [`TypeConfig`](crate::types::TypeConfig)s registered with a
/// [`TypesMapBuilder`].
///
/// Extensions whose target isn't known yet are held until [`finalize`]
/// (the target may be defined later in the same pass).
///
/// [`finalize`]: TypeBuilder::finalize
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_map_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn field_configs_from_ast(
        type_def_location: &loc::SourceLocation,
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, FieldConfig>> {
        let mut field_map: IndexMap<String, FieldConfig> = IndexMap::new();
        for field in fields {
            let fielddef_srcloc = type_def_location.with_ast_position(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    location: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: fielddef_srcloc,
                });
            }

            let mut args = IndexMap::new();
            for arg in &field.arguments {
                let arg_srcloc = type_def_location.with_ast_position(&arg.position);

                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBBCAACCTlrG
                if arg.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        location: arg_srcloc,
                        field_name: field.name.to_string(),
                        param_name: arg.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }
                args.insert(arg.name.to_string(), Self::input_value_config_from_ast(
                    &arg_srcloc,
                    arg,
                ));
            }

            let directives = DirectiveAnnotationBuilder::from_ast(
                &fielddef_srcloc,
                &field.directives,
            );
            field_map.insert(field.name.to_string(), FieldConfig {
                args,
                deprecation_reason: deprecation_reason(&directives),
                description: field.description.to_owned(),
                directives,
                metadata: JsonMap::new(),
                name: field.name.to_string(),
                resolve: None,
                // graphql_parser doesn't give us a location for the type
                // annotation itself.
                type_annotation: TypeAnnotation::from_ast_type(
                    &fielddef_srcloc,
                    &field.field_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
        Ok(field_map)
    }

    pub fn input_field_configs_from_ast(
        type_def_location: &loc::SourceLocation,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
    ) -> Result<IndexMap<String, InputValueConfig>> {
        let mut field_map: IndexMap<String, InputValueConfig> = IndexMap::new();
        for field in input_fields {
            let fielddef_srcloc = type_def_location.with_ast_position(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    location: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: fielddef_srcloc,
                });
            }

            field_map.insert(
                field.name.to_string(),
                Self::input_value_config_from_ast(&fielddef_srcloc, field),
            );
        }
        Ok(field_map)
    }

    pub fn input_value_config_from_ast(
        def_location: &loc::SourceLocation,
        input_value: &ast::schema::InputValue,
    ) -> InputValueConfig {
        InputValueConfig {
            default_value: input_value.default_value.to_owned(),
            def_location: def_location.to_owned(),
            description: input_value.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(
                def_location,
                &input_value.directives,
            ),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                def_location,
                &input_value.value_type,
            ),
        }
    }

    /// Appends `new_names` to `interfaces`, rejecting names that are already
    /// present and a type that names itself.
    ///
    /// https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
    pub fn append_interface_names(
        type_name: &str,
        location: &loc::SourceLocation,
        interfaces: &mut Vec<String>,
        new_names: &[String],
        is_interface: bool,
    ) -> Result<()> {
        for iface_name in new_names {
            if is_interface && iface_name == type_name {
                return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                    def_location: location.to_owned(),
                    interface_name: type_name.to_string(),
                });
            }
            if interfaces.contains(iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: location.to_owned(),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            interfaces.push(iface_name.to_string());
        }
        Ok(())
    }

    /// Adds the entries of `additions` after the existing entries of a type
    /// body. A name that is already present is reported via `on_duplicate`.
    pub fn extend_body<V: Clone + Send + Sync + 'static>(
        body: &mut Thunk<IndexMap<String, V>>,
        additions: IndexMap<String, V>,
        on_duplicate: impl Fn(&V, &V) -> SchemaBuildError,
    ) -> Result<()> {
        let mut merged = body.get().clone();
        for (name, addition) in additions {
            if let Some(existing) = merged.get(&name) {
                return Err(on_duplicate(existing, &addition));
            }
            merged.insert(name, addition);
        }
        *body = Thunk::ready(merged);
        Ok(())
    }
}
