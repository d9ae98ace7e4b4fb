/// Raised when an input value (a runtime value or an AST literal) can not be
/// coerced into the internal representation of a leaf type.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CoercionError {
    pub message: String,
}
impl CoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised when an internal value can not be represented by a leaf type in a
/// response.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SerializationError {
    pub message: String,
}
impl SerializationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
