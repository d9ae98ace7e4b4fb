use crate::DirectiveAnnotationBuilder;
use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::TypeBuilder;
use crate::types::TypeConfig;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeConfig;
use crate::value::JsonMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::UnionTypeExtension)>,
}

impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    /// Appends `new_members` to `members`, rejecting a name listed twice.
    fn append_members(
        type_name: &str,
        members_srcloc: &loc::SourceLocation,
        members: &mut Vec<String>,
        member_locations: &mut Vec<loc::SourceLocation>,
        new_members: &[String],
    ) -> Result<()> {
        for member_name in new_members {
            if let Some(idx) = members.iter().position(|name| name == member_name) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: type_name.to_string(),
                    member_name: member_name.to_string(),
                    member1: member_locations[idx].to_owned(),
                    member2: members_srcloc.to_owned(),
                });
            }
            members.push(member_name.to_string());
            member_locations.push(members_srcloc.to_owned());
        }
        Ok(())
    }

    fn merge_type_extension(
        config: &mut UnionTypeConfig,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        config.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
            &ext_srcloc,
            &ext.directives,
        ));

        // Earlier members only carry the location of the union as a whole.
        let mut member_locations = vec![config.def_location.to_owned(); config.types.len()];
        Self::append_members(
            ext.name.as_str(),
            &ext_srcloc,
            &mut config.types,
            &mut member_locations,
            &ext.types,
        )?;

        config.extension_locations.push(ext_srcloc);
        Ok(())
    }

    fn visit_extension_target(
        types_builder: &mut TypesMapBuilder,
        ext_srcloc: loc::SourceLocation,
        ext: &ast::schema::UnionTypeExtension,
    ) -> Result<bool> {
        match types_builder.extension_target(ext.name.as_str(), &ext_srcloc)? {
            Some(TypeConfig::Union(union_config)) => {
                Self::merge_type_extension(union_config, ext_srcloc, ext)?;
                Ok(true)
            },

            Some(non_union_config) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_union_config.kind(),
                    extension_location: ext_srcloc,
                }),

            None => Ok(false),
        }
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

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
        let uniondef_srcloc = loc::SourceLocation::schema(file_path, def.position);

        let mut types = vec![];
        Self::append_members(
            def.name.as_str(),
            &uniondef_srcloc,
            &mut types,
            &mut vec![],
            &def.types,
        )?;

        types_builder.add_new_type(TypeConfig::Union(UnionTypeConfig {
            description: def.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &uniondef_srcloc,
                &def.directives,
            ),
            def_location: uniondef_srcloc,
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: def.name.to_string(),
            resolve_type: None,
            types,
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
