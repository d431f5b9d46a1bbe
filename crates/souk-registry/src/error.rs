use thiserror::Error;

/// Errors produced by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The role is not self-registrable (unknown, or `admin`).
    #[error("invalid role for registration: {role}")]
    InvalidRole { role: String },

    /// No account matched the supplied username and password.
    #[error("invalid username or password")]
    BadCredentials,

    /// The positional index does not address a live account.
    #[error("account index {index} out of range (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
