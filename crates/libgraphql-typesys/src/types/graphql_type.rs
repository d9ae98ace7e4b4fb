use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::BuiltinScalar;
use crate::types::CoercionError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SerializationError;
use crate::types::TypeConfig;
use crate::types::UnionType;
use crate::types::type_graph::is_valid_name;
use crate::value::JsonMap;
use crate::value::JsonValue;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

/// A named node of the type graph.
///
/// Built-in scalars are unit variants. Every other variant wraps the
/// [`TypeConfig`] it was materialized from, so that
/// [`to_config()`](GraphQLType::to_config) can hand a type back to a
/// [`TypeConfigDecorator`](crate::schema::TypeConfigDecorator) when a later
/// schema extension touches it.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn from_config(config: TypeConfig) -> Self {
        match config {
            TypeConfig::Enum(c) => Self::Enum(Box::new(EnumType::from_config(c))),
            TypeConfig::InputObject(c) =>
                Self::InputObject(Box::new(InputObjectType::from_config(c))),
            TypeConfig::Interface(c) =>
                Self::Interface(Box::new(InterfaceType::from_config(c))),
            TypeConfig::Object(c) => Self::Object(Box::new(ObjectType::from_config(c))),
            TypeConfig::Scalar(c) => Self::Scalar(Box::new(ScalarType::from_config(c))),
            TypeConfig::Union(c) => Self::Union(Box::new(UnionType::from_config(c))),
        }
    }

    /// The config this type was built from. Built-in scalars have none.
    pub fn to_config(&self) -> Option<TypeConfig> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => None,
            Self::Enum(t) => Some(TypeConfig::Enum(t.to_config())),
            Self::InputObject(t) => Some(TypeConfig::InputObject(t.to_config())),
            Self::Interface(t) => Some(TypeConfig::Interface(t.to_config())),
            Self::Object(t) => Some(TypeConfig::Object(t.to_config())),
            Self::Scalar(t) => Some(TypeConfig::Scalar(t.to_config())),
            Self::Union(t) => Some(TypeConfig::Union(t.to_config())),
        }
    }

    pub fn as_builtin_scalar(&self) -> Option<BuiltinScalar> {
        match self {
            Self::Bool => Some(BuiltinScalar::Boolean),
            Self::Float => Some(BuiltinScalar::Float),
            Self::ID => Some(BuiltinScalar::ID),
            Self::Int => Some(BuiltinScalar::Int),
            Self::String => Some(BuiltinScalar::String),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String =>
                &loc::GRAPHQL_BUILTIN,
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String =>
                self.as_builtin_scalar().map(|scalar| scalar.description()),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        self.kind().is_abstract()
    }

    /// Indicates if this type can be used in an input position (variables,
    /// parameters and input fields).
    pub fn is_input_type(&self) -> bool {
        match self {
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::InputObject(_)
                | Self::Int
                | Self::Scalar(_)
                | Self::String => true,
            Self::Interface(_)
                | Self::Object(_)
                | Self::Union(_) => false,
        }
    }

    /// Scalars and enums.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar(_)
                | Self::String,
        )
    }

    /// Indicates if this type can be used as the type of a field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Coerces a leaf value for a response. Non-leaf types can not be
    /// serialized.
    pub fn serialize(
        &self,
        internal: &JsonValue,
    ) -> std::result::Result<JsonValue, SerializationError> {
        match self {
            Self::Enum(t) => t.serialize(internal),
            Self::Scalar(t) => t.serialize(internal),
            _ => match self.as_builtin_scalar() {
                Some(scalar) => scalar.serialize(internal),
                None => Err(SerializationError::new(format!(
                    "{} type `{}` is not a leaf type",
                    self.kind().name(),
                    self.name(),
                ))),
            },
        }
    }

    /// Coerces a runtime input value (e.g. a variable) into its internal
    /// representation.
    pub fn parse_value(
        &self,
        input: &JsonValue,
    ) -> std::result::Result<JsonValue, CoercionError> {
        match self {
            Self::Enum(t) => t.parse_value(input),
            Self::Scalar(t) => t.parse_value(input),
            _ => match self.as_builtin_scalar() {
                Some(scalar) => scalar.parse_value(input),
                None => Err(CoercionError::new(format!(
                    "{} type `{}` is not a leaf type",
                    self.kind().name(),
                    self.name(),
                ))),
            },
        }
    }

    /// Coerces an AST literal into its internal representation.
    pub fn parse_literal(
        &self,
        literal: &ast::Value,
        variables: &JsonMap,
    ) -> std::result::Result<JsonValue, CoercionError> {
        match self {
            Self::Enum(t) => t.parse_literal(literal, variables),
            Self::Scalar(t) => t.parse_literal(literal, variables),
            _ => match self.as_builtin_scalar() {
                Some(scalar) => scalar.parse_literal(literal, variables),
                None => Err(CoercionError::new(format!(
                    "{} type `{}` is not a leaf type",
                    self.kind().name(),
                    self.name(),
                ))),
            },
        }
    }

    /// Forces every lazily produced body of this type and checks the
    /// invariants the producers are responsible for.
    pub(crate) fn assert_valid(&self) -> Result<()> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String
                | Self::Scalar(_) => Ok(()),

            Self::Enum(enum_type) => enum_type.assert_valid(),

            Self::InputObject(inputobj_type) => {
                let fields = inputobj_type.fields();
                if fields.is_empty() {
                    return Err(self.invariant_violation(
                        "must define one or more fields".to_string(),
                    ));
                }
                for (key, field) in fields {
                    self.assert_valid_member_name("field", key, field.name())?;
                }
                Ok(())
            },

            Self::Interface(iface_type) => self.assert_valid_fields(iface_type.fields()),
            Self::Object(obj_type) => self.assert_valid_fields(obj_type.fields()),

            Self::Union(union_type) => {
                if union_type.members.is_empty() {
                    return Err(self.invariant_violation(
                        "must define one or more member types".to_string(),
                    ));
                }
                Ok(())
            },
        }
    }

    fn assert_valid_member_name(
        &self,
        member_kind: &str,
        key: &str,
        name: &str,
    ) -> Result<()> {
        if key != name {
            return Err(self.invariant_violation(format!(
                "has a {member_kind} registered as `{key}` but named `{name}`",
            )));
        }
        if !is_valid_name(name) || name.starts_with("__") {
            return Err(self.invariant_violation(format!(
                "has an invalid {member_kind} name `{name}`",
            )));
        }
        Ok(())
    }

    fn assert_valid_fields(&self, fields: &IndexMap<String, Field>) -> Result<()> {
        if fields.is_empty() {
            return Err(self.invariant_violation(
                "must define one or more fields".to_string(),
            ));
        }
        for (key, field) in fields {
            self.assert_valid_member_name("field", key, field.name())?;
            for (param_key, param) in field.parameters() {
                self.assert_valid_member_name(
                    &format!("argument on field `{key}`"),
                    param_key,
                    param.name(),
                )?;
            }
        }
        Ok(())
    }

    fn invariant_violation(&self, message: String) -> SchemaBuildError {
        SchemaBuildError::InvariantViolation {
            type_name: self.name().to_string(),
            message: format!("{} `{}` {message}", self.kind().name(), self.name()),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Self::Source,
        name: &str,
    ) -> std::result::Result<&'a GraphQLType, DerefByNameError> {
        schema.types()
            .lookup(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
