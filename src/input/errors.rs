use thiserror::Error;

/// Reasons a raw snapshot cannot become an [`InputRecord`](super::InputRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required field was not supplied
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A field was supplied but cannot be read as its numeric type
    #[error("field '{field}' must be {expected}, got '{found}'")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl InputError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            InputError::MissingField { field } | InputError::InvalidType { field, .. } => field,
        }
    }
}
