use crate::ast;
use crate::execution::executor::LinkedPath;
use crate::value::JsonValue;
use serde::Deserialize;
use serde::Serialize;

/// The result of executing an operation: a
/// [GraphQL response](https://spec.graphql.org/October2021/#sec-Response-Format).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Response {
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    /// `None` when a request error stopped execution before it started.
    /// `Some(JsonValue::Null)` when a field error on a non-null field
    /// propagated all the way up to the root.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}
impl Response {
    pub(crate) fn from_request_error(error: GraphQLError) -> Self {
        Self::from_request_errors(vec![error])
    }

    pub(crate) fn from_request_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            errors,
            data: None,
        }
    }
}

/// An [error](https://spec.graphql.org/October2021/#sec-Errors.Error-result-format)
/// reported in a [`Response`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQLLocation>,

    /// Non-empty for field errors: the path of the erroneous field within
    /// [`Response::data`].
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>, position: Option<ast::Pos>) -> Self {
        Self {
            message: message.into(),
            locations: position.map(GraphQLLocation::from).into_iter().collect(),
            path: vec![],
        }
    }

    pub(crate) fn field_error(
        message: impl Into<String>,
        path: LinkedPath<'_>,
        position: ast::Pos,
    ) -> Self {
        let mut err = Self::new(message, Some(position));
        err.path = path_to_vec(path);
        err
    }
}

/// A 1-based line and column within the executed document.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GraphQLLocation {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<ast::Pos> for GraphQLLocation {
    fn from(pos: ast::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// An element of [`GraphQLError::path`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A response key (a field name or its alias).
    Field(String),
    ListIndex(usize),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(key) => write!(f, "{key}"),
            Self::ListIndex(index) => write!(f, "{index}"),
        }
    }
}

pub(crate) fn path_to_vec(mut link: LinkedPath<'_>) -> Vec<PathSegment> {
    let mut path = Vec::new();
    while let Some(node) = link {
        path.push(node.element.clone());
        link = node.next;
    }
    path.reverse();
    path
}
