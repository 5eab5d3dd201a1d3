use thiserror::Error;

use crate::domain::StatusDomain;

/// Status classification error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// A domain name outside the closed set was supplied at a string
    /// boundary (config, CLI). A typed [`StatusDomain`] can never trigger
    /// this; treat it as a programming error in the caller.
    #[error("Unknown status domain: {0:?}")]
    UnknownDomain(String),

    /// The raw code is not part of the domain's enumeration. Callers must
    /// surface this explicitly instead of rendering an empty indicator.
    #[error("Unknown {domain} status code: {code:?}")]
    UnknownStatusCode { domain: StatusDomain, code: String },
}

impl StatusError {
    pub(crate) fn unknown_code(domain: StatusDomain, code: &str) -> Self {
        Self::UnknownStatusCode {
            domain,
            code: code.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
