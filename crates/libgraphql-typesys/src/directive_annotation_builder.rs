use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::NamedDirectiveRef;
use indexmap::IndexMap;

#[derive(Debug)]
pub struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        directives: &[ast::Directive],
    ) -> Vec<DirectiveAnnotation> {
        directives.iter().map(|ast_annot| {
            let annot_srcloc =
                annotated_item_srcloc.with_ast_position(&ast_annot.position);
            let arguments: IndexMap<String, ast::Value> =
                ast_annot.arguments
                    .iter()
                    .map(|(arg_name, arg_value)| {
                        (arg_name.to_string(), arg_value.to_owned())
                    })
                    .collect();
            DirectiveAnnotation {
                arguments,
                directive_ref: NamedDirectiveRef::new(
                    &ast_annot.name,
                    annot_srcloc,
                ),
            }
        }).collect()
    }
}
