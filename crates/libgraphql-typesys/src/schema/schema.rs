use crate::schema::SchemaBuilder;
use crate::schema::SchemaExtender;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::TypeGraph;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// A `Schema` is never modified once built. Extending one with a
/// [`SchemaExtender`] produces a new `Schema` that shares every type the
/// extension did not touch.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    /// Interface name -> names of the object types implementing it.
    pub(crate) implementations: HashMap<String, Vec<String>>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: TypeGraph,
}
impl Schema {
    /// Returns all directives defined within this [`Schema`], including the
    /// implicitly-defined built-in ones like `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Starts an extension of this schema. See [`SchemaExtender`].
    pub fn extender(&self) -> SchemaExtender<'_> {
        SchemaExtender::new(self)
    }

    /// Indicates whether `obj_type` is one of the possible runtime types of
    /// `abstract_type`.
    pub fn is_possible_type(&self, abstract_type: &GraphQLType, obj_type: &ObjectType) -> bool {
        match abstract_type {
            GraphQLType::Interface(iface) =>
                self.implementations.get(iface.name())
                    .is_some_and(|impls| impls.iter().any(|name| name == obj_type.name())),
            GraphQLType::Union(union_type) =>
                union_type.member_type_names().contains(&obj_type.name()),
            _ => false,
        }
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.lookup(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: .. }` override of the default
    /// `Mutation` name.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|named_ref| self.root_type(named_ref))
    }

    /// The object types an abstract (interface or union) type may resolve to
    /// at runtime, in declaration order.
    ///
    /// Any non-abstract type has no possible types.
    pub fn possible_types(&self, abstract_type: &GraphQLType) -> Vec<&ObjectType> {
        match abstract_type {
            GraphQLType::Interface(iface) =>
                self.implementations.get(iface.name())
                    .map(|impls| {
                        impls.iter()
                            .filter_map(|name| self.types.lookup(name))
                            .filter_map(GraphQLType::as_object)
                            .collect()
                    })
                    .unwrap_or_default(),
            GraphQLType::Union(union_type) =>
                union_type.member_type_names()
                    .into_iter()
                    .filter_map(|name| self.types.lookup(name))
                    .filter_map(GraphQLType::as_object)
                    .collect(),
            _ => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: .. }` override of the default
    /// `Query` name.
    pub fn query_type(&self) -> &ObjectType {
        self.root_type(&self.query_type)
    }

    fn root_type(&self, named_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        named_ref.deref(self)
            .ok()
            .and_then(GraphQLType::as_object)
            .expect("root type is an object type present in schema")
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|named_ref| self.root_type(named_ref))
    }

    /// All named types of this schema, including the built-in scalars.
    pub fn types(&self) -> &TypeGraph {
        &self.types
    }
}
