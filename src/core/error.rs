use std::collections::BTreeMap;

use thiserror::Error;

/// Errors surfaced by the Scrada client and the few fallible constructors.
///
/// The invoice model itself never fails: malformed input is coerced to
/// defaults during normalization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScradaError {
    /// The API rejected the credentials (HTTP 401).
    #[error("{0}")]
    Authentication(String),

    /// The requested resource does not exist (HTTP 404).
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// The API rejected the payload (HTTP 422), with per-field messages.
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// Any other non-success response.
    #[error("Scrada API error: {message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection, TLS or timeout failure below the HTTP layer.
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body could not be read.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local file access (attachments).
    #[error("I/O error: {0}")]
    Io(String),
}

impl ScradaError {
    /// Shortcut for a 401 response.
    pub fn invalid_credentials() -> Self {
        Self::Authentication("Invalid Scrada API credentials provided".into())
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// HTTP status associated with this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(422),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field errors of a validation failure; `None` for every other kind.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
