//! The uniform error record returned by every operation

use super::kind::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error record shown to the user
///
/// Serializes as `{success:false, error:true, data:[], message}` no matter
/// where the failure came from. `kind` stays on the Rust side only.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Always `true`
    pub error: bool,
    /// Always empty
    pub data: Vec<Value>,
    /// Human-readable message
    pub message: String,
    #[serde(skip)]
    pub kind: ErrorKind,
}

impl ErrorResponse {
    /// Create an error record of the given kind
    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: true,
            data: Vec::new(),
            message: message.into(),
            kind,
        }
    }

    /// Create an error record using the default message for the kind
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::with_kind(kind, kind.message())
    }

    // ==================== Convenience constructors ====================

    pub fn not_authenticated() -> Self {
        Self::from_kind(ErrorKind::NotAuthenticated)
    }

    pub fn invalid_response() -> Self {
        Self::from_kind(ErrorKind::InvalidResponse)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Validation, msg)
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Transport, msg)
    }
}

/// Build the uniform error record for a free-text backend message
///
/// Call sites that know the failure kind use [`ErrorResponse::with_kind`].
pub fn make_error(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse::with_kind(ErrorKind::Backend, message)
}
