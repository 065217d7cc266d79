//! Planilla Client - API client for the payroll admin backend
//!
//! Every operation resolves to a tagged result: the uniform
//! [`ErrorResponse`](shared::ErrorResponse) or a
//! [`SuccessResponse`](shared::SuccessResponse). Nothing panics or throws
//! past the caller.

pub mod api;
pub mod classifier;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod grid;
pub mod handoff;
pub mod logger;
pub mod session;
pub mod transaction;
pub mod transport;

pub use classifier::{classify_envelope, classify_response, classify_result};
pub use client::PlanillaClient;
pub use config::{ClientConfig, Environment};
pub use credentials::{CookieStore, CredentialSource, NoCredentials, StaticToken};
pub use error::{ClientError, ClientResult};
pub use handoff::{HandoffStore, Screen};
pub use session::Session;
pub use transaction::TransactionRunner;
pub use transport::{ApiClient, NetworkApiClient, TransportError, TransportResult, UploadForm};

// Re-export shared types for convenience
pub use shared::{
    Acceso, ApiOutcome, ErrorKind, ErrorResponse, SuccessResponse, User, make_error, wrap_success,
};
