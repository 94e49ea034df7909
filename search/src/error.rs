use thiserror::Error;

/// Caller-facing failures. The `Display` text of every variant is safe to
/// return to the caller; upstream bodies and internal causes are logged at
/// the point of failure and never stored here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("The request must be made while authenticated.")]
    Unauthenticated,

    #[error("The request must include a non-empty 'query' argument.")]
    InvalidArgument,

    #[error("Search service call failed with status: {status}")]
    Upstream { status: u16 },

    #[error("Failed to call Gemini API.")]
    Internal,
}

impl QueryError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Unauthenticated => "unauthenticated",
            QueryError::InvalidArgument => "invalid-argument",
            QueryError::Upstream { .. } => "upstream-error",
            QueryError::Internal => "internal",
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            QueryError::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret {0} is not set")]
    Missing(String),

    #[error("secret {0} is empty")]
    Empty(String),
}
