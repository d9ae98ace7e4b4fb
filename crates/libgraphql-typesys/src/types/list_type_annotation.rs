use crate::loc;
use crate::types::TypeAnnotation;
use crate::types::TypeGraph;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) ref_location: loc::SourceLocation,
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        type_graph: &TypeGraph,
        other: &Self,
    ) -> bool {
        self.inner_type_ref.is_subtype_of_impl(type_graph, &other.inner_type_ref)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
