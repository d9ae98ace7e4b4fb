use crate::DirectiveAnnotationBuilder;
use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::ScalarTypeConfig;
use crate::types::TypeBuilder;
use crate::types::TypeConfig;
use crate::types::TypesMapBuilder;
use crate::value::JsonMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The `url` argument of an `@specifiedBy` annotation, if one is present.
fn specified_by_url(directives: &[DirectiveAnnotation]) -> Option<String> {
    directives.iter()
        .filter(|annot| annot.directive_type_name() == "specifiedBy")
        .find_map(|annot| match annot.arguments().get("url") {
            Some(ast::Value::String(url)) => Some(url.to_string()),
            _ => None,
        })
}

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ScalarTypeExtension)>,
}

impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        config: &mut ScalarTypeConfig,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::ScalarTypeExtension,
    ) {
        let mut directives = DirectiveAnnotationBuilder::from_ast(
            &ext_srcloc,
            &ext.directives,
        );
        if config.specified_by_url.is_none() {
            config.specified_by_url = specified_by_url(&directives);
        }
        config.directives.append(&mut directives);
        config.extension_locations.push(ext_srcloc);
    }

    fn visit_extension_target(
        types_builder: &mut TypesMapBuilder,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::ScalarTypeExtension,
    ) -> Result<bool> {
        match types_builder.extension_target(ext.name.as_str(), &ext_srcloc)? {
            Some(TypeConfig::Scalar(scalar_config)) => {
                Self::merge_type_extension(scalar_config, ext_srcloc, ext);
                Ok(true)
            },

            Some(non_scalar_config) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_scalar_config.kind(),
                    extension_location: ext_srcloc,
                }),

            None => Ok(false),
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

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
        let scalardef_srcloc = loc::SourceLocation::schema(file_path, def.position);
        let directives = DirectiveAnnotationBuilder::from_ast(
            &scalardef_srcloc,
            &def.directives,
        );

        types_builder.add_new_type(TypeConfig::Scalar(ScalarTypeConfig {
            def_location: scalardef_srcloc,
            description: def.description.to_owned(),
            specified_by_url: specified_by_url(&directives),
            directives,
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: def.name.to_string(),
            parse_literal: None,
            parse_value: None,
            serialize: None,
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
