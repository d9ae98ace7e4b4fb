use crate::DirectiveAnnotationBuilder;
use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::InterfaceTypeConfig;
use crate::types::Thunk;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypeConfig;
use crate::types::TypesMapBuilder;
use crate::value::JsonMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InterfaceTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::InterfaceTypeExtension)>,
}

impl InterfaceTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        config: &mut InterfaceTypeConfig,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::InterfaceTypeExtension,
    ) -> Result<()> {
        config.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
            &ext_srcloc,
            &ext.directives,
        ));

        TypeBuilderHelpers::append_interface_names(
            ext.name.as_str(),
            &ext_srcloc,
            &mut config.interfaces,
            &ext.implements_interfaces,
            /* is_interface = */ true,
        )?;

        let ext_fields = TypeBuilderHelpers::field_configs_from_ast(
            &ext_srcloc,
            ext.name.as_str(),
            &ext.fields,
        )?;
        TypeBuilderHelpers::extend_body(&mut config.fields, ext_fields, |existing, added| {
            SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: ext.name.to_string(),
                field_name: added.name.to_string(),
                field_def1: existing.def_location.to_owned(),
                field_def2: added.def_location.to_owned(),
            }
        })?;

        config.extension_locations.push(ext_srcloc);
        Ok(())
    }

    fn visit_extension_target(
        types_builder: &mut TypesMapBuilder,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::InterfaceTypeExtension,
    ) -> Result<bool> {
        match types_builder.extension_target(ext.name.as_str(), &ext_srcloc)? {
            Some(TypeConfig::Interface(iface_config)) => {
                Self::merge_type_extension(iface_config, ext_srcloc, ext)?;
                Ok(true)
            },

            Some(non_iface_config) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_iface_config.kind(),
                    extension_location: ext_srcloc,
                }),

            None => Ok(false),
        }
    }
}

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::schema::InterfaceType;
    type AstTypeExtension = ast::schema::InterfaceTypeExtension;

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
        let ifacedef_srcloc = loc::SourceLocation::schema(file_path, def.position);

        let fields = TypeBuilderHelpers::field_configs_from_ast(
            &ifacedef_srcloc,
            def.name.as_str(),
            &def.fields,
        )?;

        // https://spec.graphql.org/October2021/#sel-GAHbhBDABAB_E-0b
        let mut interfaces = vec![];
        TypeBuilderHelpers::append_interface_names(
            def.name.as_str(),
            &ifacedef_srcloc,
            &mut interfaces,
            &def.implements_interfaces,
            /* is_interface = */ true,
        )?;

        types_builder.add_new_type(TypeConfig::Interface(InterfaceTypeConfig {
            description: def.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &ifacedef_srcloc,
                &def.directives,
            ),
            def_location: ifacedef_srcloc,
            extension_locations: vec![],
            fields: Thunk::ready(fields),
            interfaces,
            metadata: JsonMap::new(),
            name: def.name.to_string(),
            resolve_field: None,
            resolve_type: None,
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
