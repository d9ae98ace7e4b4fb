//! The declarative configuration of named types.
//!
//! A [`TypeConfig`] is what schema-language definitions (and programmatic
//! type registration) produce, what a
//! [`TypeConfigDecorator`](crate::schema::TypeConfigDecorator) receives and
//! returns, and what a materialized [`GraphQLType`](crate::types::GraphQLType)
//! is built from. Fields are public so decorators can edit them directly.

use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::types::FieldResolver;
use crate::types::GraphQLTypeKind;
use crate::types::IsTypeOf;
use crate::types::ScalarLiteralParser;
use crate::types::ScalarSerializer;
use crate::types::ScalarValueParser;
use crate::types::Thunk;
use crate::types::TypeAnnotation;
use crate::types::TypeResolver;
use crate::value::JsonMap;
use crate::value::JsonValue;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub enum TypeConfig {
    Enum(EnumTypeConfig),
    InputObject(InputObjectTypeConfig),
    Interface(InterfaceTypeConfig),
    Object(ObjectTypeConfig),
    Scalar(ScalarTypeConfig),
    Union(UnionTypeConfig),
}
impl TypeConfig {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(c) => &c.def_location,
            Self::InputObject(c) => &c.def_location,
            Self::Interface(c) => &c.def_location,
            Self::Object(c) => &c.def_location,
            Self::Scalar(c) => &c.def_location,
            Self::Union(c) => &c.def_location,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(c) => c.description.as_deref(),
            Self::InputObject(c) => c.description.as_deref(),
            Self::Interface(c) => c.description.as_deref(),
            Self::Object(c) => c.description.as_deref(),
            Self::Scalar(c) => c.description.as_deref(),
            Self::Union(c) => c.description.as_deref(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(c) => c.name.as_str(),
            Self::InputObject(c) => c.name.as_str(),
            Self::Interface(c) => c.name.as_str(),
            Self::Object(c) => c.name.as_str(),
            Self::Scalar(c) => c.name.as_str(),
            Self::Union(c) => c.name.as_str(),
        }
    }
}

/// Shape of an object type.
#[derive(Clone, Debug)]
pub struct ObjectTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub fields: Thunk<IndexMap<String, FieldConfig>>,
    pub interfaces: Vec<String>,
    pub is_type_of: Option<IsTypeOf>,
    pub metadata: JsonMap,
    pub name: String,
    pub resolve_field: Option<FieldResolver>,
}
impl ObjectTypeConfig {
    pub fn new(
        name: impl Into<String>,
        fields: impl FnOnce() -> IndexMap<String, FieldConfig> + Send + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            fields: Thunk::new(fields),
            interfaces: vec![],
            is_type_of: None,
            metadata: JsonMap::new(),
            name: name.into(),
            resolve_field: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InterfaceTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub fields: Thunk<IndexMap<String, FieldConfig>>,
    pub interfaces: Vec<String>,
    pub metadata: JsonMap,
    pub name: String,
    pub resolve_field: Option<FieldResolver>,
    pub resolve_type: Option<TypeResolver>,
}
impl InterfaceTypeConfig {
    pub fn new(
        name: impl Into<String>,
        fields: impl FnOnce() -> IndexMap<String, FieldConfig> + Send + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            fields: Thunk::new(fields),
            interfaces: vec![],
            metadata: JsonMap::new(),
            name: name.into(),
            resolve_field: None,
            resolve_type: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnionTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub metadata: JsonMap,
    pub name: String,
    pub resolve_type: Option<TypeResolver>,
    /// Member type names, in declaration order.
    pub types: Vec<String>,
}
impl UnionTypeConfig {
    pub fn new(
        name: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: name.into(),
            resolve_type: None,
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnumTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub metadata: JsonMap,
    pub name: String,
    pub values: Thunk<Vec<EnumValueConfig>>,
}
impl EnumTypeConfig {
    /// An enum whose values are produced on first access.
    pub fn new(
        name: impl Into<String>,
        values: impl FnOnce() -> Vec<EnumValueConfig> + Send + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: name.into(),
            values: Thunk::new(values),
        }
    }

    /// An enum declared with a fixed list of values.
    pub fn with_values(
        name: impl Into<String>,
        values: impl IntoIterator<Item = EnumValueConfig>,
    ) -> Self {
        let values: Vec<EnumValueConfig> = values.into_iter().collect();
        Self::new(name, move || values)
    }
}

#[derive(Clone, Debug)]
pub struct EnumValueConfig {
    pub def_location: loc::SourceLocation,
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    /// The internal representation of this value. Defaults to the name.
    pub value: JsonValue,
}
impl EnumValueConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            def_location: loc::SourceLocation::Programmatic,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            value: JsonValue::String(name.clone()),
            name,
        }
    }

    pub fn with_value(mut self, value: impl Into<JsonValue>) -> Self {
        self.value = value.into();
        self
    }
}

#[derive(Clone, Debug)]
pub struct ScalarTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub metadata: JsonMap,
    pub name: String,
    pub parse_literal: Option<ScalarLiteralParser>,
    pub parse_value: Option<ScalarValueParser>,
    pub serialize: Option<ScalarSerializer>,
    pub specified_by_url: Option<String>,
}
impl ScalarTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            metadata: JsonMap::new(),
            name: name.into(),
            parse_literal: None,
            parse_value: None,
            serialize: None,
            specified_by_url: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InputObjectTypeConfig {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub extension_locations: Vec<loc::SourceLocation>,
    pub fields: Thunk<IndexMap<String, InputValueConfig>>,
    pub metadata: JsonMap,
    pub name: String,
}
impl InputObjectTypeConfig {
    pub fn new(
        name: impl Into<String>,
        fields: impl FnOnce() -> IndexMap<String, InputValueConfig> + Send + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_locations: vec![],
            fields: Thunk::new(fields),
            metadata: JsonMap::new(),
            name: name.into(),
        }
    }
}

/// Configuration of an output field on an object or interface type.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub args: IndexMap<String, InputValueConfig>,
    pub def_location: loc::SourceLocation,
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub metadata: JsonMap,
    pub name: String,
    pub resolve: Option<FieldResolver>,
    pub type_annotation: TypeAnnotation,
}
impl FieldConfig {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            args: IndexMap::new(),
            def_location: loc::SourceLocation::Programmatic,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            metadata: JsonMap::new(),
            name: name.into(),
            resolve: None,
            type_annotation,
        }
    }

    pub fn with_arg(mut self, arg: InputValueConfig) -> Self {
        self.args.insert(arg.name.clone(), arg);
        self
    }

    pub fn with_resolver(mut self, resolver: FieldResolver) -> Self {
        self.resolve = Some(resolver);
        self
    }
}

/// Configuration of a field argument or of an input object field.
#[derive(Clone, Debug)]
pub struct InputValueConfig {
    pub default_value: Option<ast::Value>,
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub type_annotation: TypeAnnotation,
}
impl InputValueConfig {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.into(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: ast::Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Same name, equivalent type, same default and same description.
    pub(crate) fn is_equivalent_to(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_annotation.is_equivalent_to(&other.type_annotation)
            && self.default_value == other.default_value
            && self.description == other.description
    }
}

macro_rules! impl_from_config {
    ($($variant:ident($config:ident)),* $(,)?) => {
        $(impl std::convert::From<$config> for TypeConfig {
            fn from(config: $config) -> Self {
                Self::$variant(config)
            }
        })*
    };
}
impl_from_config!(
    Enum(EnumTypeConfig),
    InputObject(InputObjectTypeConfig),
    Interface(InterfaceTypeConfig),
    Object(ObjectTypeConfig),
    Scalar(ScalarTypeConfig),
    Union(UnionTypeConfig),
);
