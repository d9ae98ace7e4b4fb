use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypeGraph;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    type_graph: &'a TypeGraph,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        type_graph: &'a TypeGraph,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            type_graph,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        for (field_name, field) in self.type_.fields() {
            self.validate_field_type(type_name, field_name, field);
        }

        let mut path = vec![];
        let mut visiting = HashSet::from([type_name]);
        self.find_unbreakable_cycles(type_name, self.type_.fields(), &mut path, &mut visiting);
        self.errors
    }

    /// Input fields can only reference defined input types.
    ///
    /// https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
    fn validate_field_type(&mut self, type_name: &str, field_name: &str, field: &InputField) {
        let annot = field.type_annotation();
        let field_type_name = annot.innermost_named_type_annotation().graphql_type_name();
        match self.type_graph.lookup(field_type_name) {
            Some(field_type) if !field_type.is_input_type() =>
                self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                    def_location: annot.ref_location().to_owned(),
                    field_name: field_name.to_string(),
                    invalid_type_name: field_type_name.to_string(),
                    parent_type_name: type_name.to_string(),
                }),
            Some(_) => (),
            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: annot.ref_location().to_owned(),
                undefined_type_name: field_type_name.to_string(),
            }),
        }
    }

    /// Walks chains of non-null, non-list input fields looking for one that
    /// leads back to a type already on the chain. Such a cycle can never be
    /// satisfied by a finite input value.
    fn find_unbreakable_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<String>,
        visiting: &mut HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            if is_cycle_breaking(field.type_annotation()) {
                continue;
            }

            let field_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            path.push(format!("{type_name}.{field_name}"));

            if visiting.contains(field_type_name) {
                let mut circular_field_path = path.clone();
                circular_field_path.push(field_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                });
            } else if let Some(GraphQLType::InputObject(field_type)) =
                self.type_graph.lookup(field_type_name)
            {
                visiting.insert(field_type_name);
                self.find_unbreakable_cycles(
                    field_type_name,
                    field_type.fields(),
                    path,
                    visiting,
                );
                visiting.remove(field_type_name);
            }

            path.pop();
        }
    }
}

/// A nullable wrapper at any level (or a list, which may be empty) breaks an
/// input-object cycle.
fn is_cycle_breaking(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List(_) => true,
        TypeAnnotation::Named(named_annot) => named_annot.nullable(),
    }
}
