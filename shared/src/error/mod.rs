//! Error records for the payroll client
//!
//! - [`ErrorKind`]: what went wrong, with a default Spanish message
//! - [`ErrorResponse`]: the uniform `{success, error, data, message}` record
//! - [`make_error`]: a backend-kind record from a bare message
//!
//! # Example
//!
//! ```
//! use shared::error::{make_error, ErrorKind, ErrorResponse};
//!
//! let err = make_error("Duplicate entry for key cedula");
//! assert!(err.error);
//!
//! let err = ErrorResponse::from_kind(ErrorKind::NotFound);
//! assert_eq!(err.message, "Recurso no encontrado");
//! ```

mod kind;
mod types;

pub use kind::{DUPLICATE_ENTRY_MARKER, ErrorKind, messages};
pub use types::{ErrorResponse, make_error};
