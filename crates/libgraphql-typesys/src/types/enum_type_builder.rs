use crate::DirectiveAnnotationBuilder;
use crate::ast;
use crate::directive_annotation::deprecation_reason;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumTypeConfig;
use crate::types::EnumValueConfig;
use crate::types::Thunk;
use crate::types::TypeBuilder;
use crate::types::TypeConfig;
use crate::types::TypesMapBuilder;
use crate::value::JsonMap;
use crate::value::JsonValue;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::EnumTypeExtension)>,
}

impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    /// Appends the values of `ast_values` to `values`, rejecting any name that
    /// is already present.
    fn append_values(
        enum_name: &str,
        enum_def_location: &loc::SourceLocation,
        type_srcloc: &loc::SourceLocation,
        values: &mut Vec<EnumValueConfig>,
        ast_values: &[ast::schema::EnumValue],
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_srcloc = type_srcloc.with_ast_position(&ast_value.position);
            if let Some(existing_value) = values.iter().find(|v| v.name == ast_value.name) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    enum_def_location: enum_def_location.to_owned(),
                    value_def1: existing_value.def_location.to_owned(),
                    value_def2: value_srcloc,
                });
            }

            let directives = DirectiveAnnotationBuilder::from_ast(
                &value_srcloc,
                &ast_value.directives,
            );
            values.push(EnumValueConfig {
                def_location: value_srcloc,
                deprecation_reason: deprecation_reason(&directives),
                description: ast_value.description.to_owned(),
                directives,
                name: ast_value.name.to_string(),
                value: JsonValue::String(ast_value.name.to_string()),
            });
        }
        Ok(())
    }

    fn merge_type_extension(
        config: &mut EnumTypeConfig,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        config.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
            &ext_srcloc,
            &ext.directives,
        ));

        let mut values = config.values.get().clone();
        Self::append_values(
            ext.name.as_str(),
            &config.def_location,
            &ext_srcloc,
            &mut values,
            &ext.values,
        )?;
        config.values = Thunk::ready(values);

        config.extension_locations.push(ext_srcloc);
        Ok(())
    }

    fn visit_extension_target(
        types_builder: &mut TypesMapBuilder,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::EnumTypeExtension,
    ) -> Result<bool> {
        match types_builder.extension_target(ext.name.as_str(), &ext_srcloc)? {
            Some(TypeConfig::Enum(enum_config)) => {
                Self::merge_type_extension(enum_config, ext_srcloc, ext)?;
                Ok(true)
            },

            Some(non_enum_config) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_enum_config.kind(),
                    extension_location: ext_srcloc,
                }),

            None => Ok(false),
        }
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            let ext_srcloc = loc::SourceLocation::schema(ext_path.as_deref(), ext.position);
            if !Self::visit_extension_target(types_builder, ext_srcloc.to_owned(), &ext)? {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: ext.name.to_string(),
                    extension_location: ext_srcloc,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let enumdef_srcloc = loc::SourceLocation::schema(file_path, def.position);

        if def.values.is_empty() {
            return Err(SchemaBuildError::EnumWithNoVariants {
                type_name: def.name.to_string(),
                location: enumdef_srcloc,
            });
        }

        let mut values = vec![];
        Self::append_values(
            def.name.as_str(),
            &enumdef_srcloc,
            &enumdef_srcloc,
            &mut values,
            &def.values,
        )?;

        types_builder.add_new_type(TypeConfig::Enum(EnumTypeConfig {
            description: def.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &enumdef_srcloc,
                &def.directives,
            ),
            def_location: enumdef_srcloc,
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: def.name.to_string(),
            values: Thunk::ready(values),
        }))
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = loc::SourceLocation::schema(file_path, ext.position);
        if !Self::visit_extension_target(types_builder, ext_srcloc, &ext)? {
            self.extensions.push((file_path.map(|p| p.to_path_buf()), ext));
        }
        Ok(())
    }
}
