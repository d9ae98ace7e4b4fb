use crate::schema::TypeValidationError;
use crate::types::TypeGraph;
use crate::types::UnionType;

/// Union members must be defined object types.
///
/// https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
pub(super) struct UnionTypeValidator<'a> {
    type_: &'a UnionType,
    type_graph: &'a TypeGraph,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(
        type_: &'a UnionType,
        type_graph: &'a TypeGraph,
    ) -> Self {
        Self {
            type_,
            type_graph,
        }
    }

    pub fn validate(self) -> Vec<TypeValidationError> {
        self.type_.members.iter().filter_map(|(member_name, member_ref)| {
            match self.type_graph.lookup(member_name) {
                None => Some(TypeValidationError::UndefinedTypeName {
                    ref_location: member_ref.ref_location().to_owned(),
                    undefined_type_name: member_name.to_string(),
                }),
                Some(member_type) if member_type.as_object().is_none() =>
                    Some(TypeValidationError::InvalidUnionMemberTypeKind {
                        location: member_ref.ref_location().to_owned(),
                        member_type_kind: member_type.kind(),
                        member_type_name: member_name.to_string(),
                        union_type_name: self.type_.name().to_string(),
                    }),
                Some(_) => None,
            }
        }).collect()
    }
}
