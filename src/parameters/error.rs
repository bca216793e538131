//! Parameter error types

/// Result type for parameter store operations
pub type Result<T> = core::result::Result<T, ParameterError>;

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name longer than 16 characters
    NameTooLong,
    /// No parameter registered under this name
    NotFound,
    /// Value type differs from the registered type
    TypeMismatch,
    /// Read-only parameter cannot be modified
    ReadOnly,
    /// Store is full
    StoreFull,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::NameTooLong => write!(f, "parameter name too long"),
            ParameterError::NotFound => write!(f, "parameter not found"),
            ParameterError::TypeMismatch => write!(f, "parameter type mismatch"),
            ParameterError::ReadOnly => write!(f, "parameter is read-only"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
        }
    }
}
