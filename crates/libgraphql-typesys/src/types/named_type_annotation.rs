use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeGraph;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    /// The referenced type, or `None` if the schema has no type by that name.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Same type name and same nullability; source locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    pub fn is_subtype_of(
        &self,
        schema: &Schema,
        other: &Self,
    ) -> bool {
        self.is_subtype_of_impl(schema.types(), other)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        type_graph: &TypeGraph,
        other: &Self,
    ) -> bool {
        let Some(self_graphql_type) = type_graph.lookup(self.type_ref.name()) else {
            return false;
        };
        let Some(other_graphql_type) = type_graph.lookup(other.type_ref.name()) else {
            return false;
        };

        match (self_graphql_type, other_graphql_type) {
            (self_t, other_t) if self_t.name() == other_t.name()
                => true,
            (GraphQLType::Interface(self_iface),
             GraphQLType::Interface(other_iface))
                => self_iface.interface_names().contains(&other_iface.name()),
            (GraphQLType::Object(self_obj),
             GraphQLType::Interface(other_iface))
                => self_obj.interface_names().contains(&other_iface.name()),
            (GraphQLType::Object(self_obj),
             GraphQLType::Union(other_union))
                => other_union.member_type_names().contains(&self_obj.name()),
            (_, _) => false,
        }
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }
}
