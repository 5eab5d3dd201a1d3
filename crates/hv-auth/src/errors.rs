use thiserror::Error;

/// Authentication configuration error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unknown identity provider: {0:?}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
