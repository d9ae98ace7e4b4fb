use crate::ast;
use crate::execution::GraphQLLocation;
use serde::Deserialize;
use serde::Serialize;

/// A problem found by a validation rule, located in the validated document.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQLLocation>,
}
impl ValidationError {
    pub(crate) fn new(message: impl Into<String>, position: ast::Pos) -> Self {
        Self {
            message: message.into(),
            locations: vec![GraphQLLocation::from(position)],
        }
    }
}
