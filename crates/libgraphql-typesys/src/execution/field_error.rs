use crate::execution::AbstractTypeResolutionError;
use crate::types::CoercionError;
use crate::types::SerializationError;

/// Returned by a [`FieldResolver`](crate::types::FieldResolver) to fail the
/// field it is resolving.
///
/// The field's value becomes `null` and the message is reported in the
/// response at the field's path. Other fields keep resolving.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
impl std::convert::From<AbstractTypeResolutionError> for FieldError {
    fn from(err: AbstractTypeResolutionError) -> Self {
        Self::new(err.to_string())
    }
}
impl std::convert::From<CoercionError> for FieldError {
    fn from(err: CoercionError) -> Self {
        Self::new(err.message)
    }
}
impl std::convert::From<SerializationError> for FieldError {
    fn from(err: SerializationError) -> Self {
        Self::new(err.message)
    }
}
impl std::convert::From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
impl std::convert::From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
