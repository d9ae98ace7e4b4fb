use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Matches `/^[_A-Za-z][_0-9A-Za-z]*$/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// The mapping from type name to [`GraphQLType`] owned by a
/// [`Schema`](crate::Schema).
///
/// Iteration follows registration order, which is the declaration order of
/// the schema text (built-in scalars first).
#[derive(Clone, Debug)]
pub struct TypeGraph {
    types: IndexMap<String, GraphQLType>,
}
impl TypeGraph {
    /// A graph holding only the five built-in scalars.
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    /// All type names, sorted.
    pub fn all_type_names(&self) -> BTreeSet<&str> {
        self.types.keys().map(|name| name.as_str()).collect()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Every type, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn lookup(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn register_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name();
        if !is_valid_name(type_name) {
            return Err(SchemaBuildError::InvalidTypeName {
                def_location: type_.def_location().to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_.def_location().to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Forces every lazy body, then checks all types together: interface
    /// implementations, references to undefined types, input object cycles and
    /// union member kinds.
    pub(crate) fn validate(&self) -> Result<()> {
        for type_ in self.types.values() {
            type_.assert_valid()?;
        }

        let mut errors: Vec<TypeValidationError> = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, self)
                        .validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(type_.name(), &type_.data, self)
                        .validate(&mut HashSet::new())
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(type_.name(), &type_.data, self)
                        .validate(&mut HashSet::new())
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, self)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }
        Ok(())
    }
}
impl Default for TypeGraph {
    fn default() -> Self {
        Self::new()
    }
}
impl<'a> IntoIterator for &'a TypeGraph {
    type Item = (&'a String, &'a GraphQLType);
    type IntoIter = indexmap::map::Iter<'a, String, GraphQLType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
