//! Error kinds surfaced by the payroll client
//!
//! Every failure a screen can show ends up as one of these kinds. Callers
//! branch and log on the kind; the user still sees a single message string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default messages shown when the backend does not supply a detail
pub mod messages {
    pub const NOT_AUTHENTICATED: &str = "Usuario no autenticado";
    pub const INVALID_API_RESPONSE: &str = "Respuesta inválida de la API";
    pub const INVALID_RESPONSE_FORMAT: &str = "Formato de respuesta inválido";
    pub const INTERNAL_SERVER_ERROR: &str = "Error interno del servidor";
    pub const NOT_FOUND: &str = "Recurso no encontrado";
    pub const ACCESS_DENIED: &str = "Acceso denegado";
    pub const VALIDATION_ERROR: &str = "Error de validación";
    pub const NETWORK_ERROR: &str = "Error de conexión con el servidor";
    pub const LOAD_ERROR: &str = "Error al cargar los datos";
    pub const NO_PERMISSION: &str = "No tiene permisos para realizar esta acción";
}

/// Backend text marking a unique-key violation
pub const DUPLICATE_ENTRY_MARKER: &str = "Duplicate entry";

/// Classification of an error record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No authenticated user; detected before any request is sent
    NotAuthenticated,
    /// Request never produced a usable response (network, non-2xx, bad JSON)
    Transport,
    /// Response body was JSON but not an object
    MalformedResponse,
    /// Envelope missing or falsy
    InvalidResponse,
    /// Backend reported status 500
    ServerError,
    /// Unique-key violation reported by the backend
    DuplicateEntry,
    /// Backend reported 404
    NotFound,
    /// Backend reported 403
    PermissionDenied,
    /// Backend reported 422, or a local field check failed
    Validation,
    /// Free-text `respuesta.error` from the backend
    #[default]
    Backend,
}

impl ErrorKind {
    /// Message used when no more specific text is available
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotAuthenticated => messages::NOT_AUTHENTICATED,
            ErrorKind::Transport => messages::NETWORK_ERROR,
            ErrorKind::MalformedResponse => messages::INVALID_RESPONSE_FORMAT,
            ErrorKind::InvalidResponse => messages::INVALID_API_RESPONSE,
            ErrorKind::ServerError | ErrorKind::DuplicateEntry => messages::INTERNAL_SERVER_ERROR,
            ErrorKind::NotFound => messages::NOT_FOUND,
            ErrorKind::PermissionDenied => messages::ACCESS_DENIED,
            ErrorKind::Validation => messages::VALIDATION_ERROR,
            ErrorKind::Backend => messages::LOAD_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotAuthenticated => "not_authenticated",
            ErrorKind::Transport => "transport",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::ServerError => "server_error",
            ErrorKind::DuplicateEntry => "duplicate_entry",
            ErrorKind::NotFound => "not_found",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::Validation => "validation",
            ErrorKind::Backend => "backend",
        };
        f.write_str(name)
    }
}
