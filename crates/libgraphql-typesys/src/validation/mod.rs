//! Validation rules run over documents before they are built or executed.

mod known_type_names;
mod validation_error;

pub use known_type_names::KnownTypeNames;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
