//! Shared types for the payroll client
//!
//! Wire envelopes, the uniform error/success records, domain payloads and
//! the field checks forms run before submitting.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod validation;

// Re-exports
pub use error::{ErrorKind, ErrorResponse, make_error};
pub use request::{Acceso, CommonRequestData, Transaccion, User};
pub use response::{ApiOutcome, SuccessResponse, wrap_success};
pub use serde::{Deserialize, Serialize};
