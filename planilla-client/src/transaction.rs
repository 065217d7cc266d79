//! Generic transaction runner
//!
//! Every create/edit/list operation follows the same steps: check the
//! session, build the `{user, <entity>, acceso}` envelope, send it, classify
//! the answer, wrap the payload. Entity modules only supply the entity key,
//! endpoint and method.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{ErrorKind, ErrorResponse};
use shared::validation::first_message;
use shared::{Acceso, ApiOutcome, SuccessResponse, Transaccion, wrap_success};
use tracing::{debug, warn};
use validator::Validate;

use crate::classifier::{classify_envelope, classify_failure};
use crate::session::Session;
use crate::transport::{ApiClient, TransportResult, UploadForm};

/// Multipart field carrying the JSON transaction next to uploaded files
pub const TRANSACTION_FIELD: &str = "transaccion";

/// Runs transactions on behalf of the session user
#[derive(Clone)]
pub struct TransactionRunner {
    api: Arc<dyn ApiClient>,
    session: Arc<Session>,
}

impl TransactionRunner {
    pub fn new(api: Arc<dyn ApiClient>, session: Arc<Session>) -> Self {
        Self { api, session }
    }

    pub fn api(&self) -> &Arc<dyn ApiClient> {
        &self.api
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn envelope<T: Serialize>(
        &self,
        entity_key: &'static str,
        payload: &T,
        acceso: Acceso,
    ) -> Result<Value, ErrorResponse> {
        let Some(user) = self.session.current_user() else {
            warn!(entity = entity_key, "No authenticated user, request not sent");
            return Err(ErrorResponse::not_authenticated());
        };
        let transaccion = Transaccion::new(user, entity_key, payload, acceso);
        serde_json::to_value(&transaccion)
            .map_err(|e| ErrorResponse::with_kind(ErrorKind::Validation, e.to_string()))
    }

    /// Send one transaction and normalize the answer
    pub async fn run_transaction<T: Serialize>(
        &self,
        entity_key: &'static str,
        endpoint: &str,
        payload: &T,
        method: Method,
        acceso: Acceso,
    ) -> ApiOutcome<Value> {
        let body = self.envelope(entity_key, payload, acceso)?;
        self.send(entity_key, endpoint, &body, method).await
    }

    /// Check form fields locally, then run the transaction
    ///
    /// The session is checked first. A failed field check returns a
    /// validation error without touching the network.
    pub async fn run_validated<T: Serialize + Validate>(
        &self,
        entity_key: &'static str,
        endpoint: &str,
        payload: &T,
        method: Method,
        acceso: Acceso,
    ) -> ApiOutcome<Value> {
        let body = self.envelope(entity_key, payload, acceso)?;
        if let Err(errors) = payload.validate() {
            let message = first_message(&errors);
            debug!(entity = entity_key, reason = %message, "Payload rejected before submission");
            return Err(ErrorResponse::validation(message));
        }
        self.send(entity_key, endpoint, &body, method).await
    }

    async fn send(
        &self,
        entity_key: &'static str,
        endpoint: &str,
        body: &Value,
        method: Method,
    ) -> ApiOutcome<Value> {
        debug!(entity = entity_key, endpoint, %method, "Running transaction");
        let result = self.api.request(method, endpoint, body, true).await;
        finish(entity_key, endpoint, result)
    }

    /// Send files together with a transaction
    ///
    /// The transaction travels as a JSON text field named `transaccion`.
    pub async fn run_upload<T: Serialize>(
        &self,
        entity_key: &'static str,
        endpoint: &str,
        payload: &T,
        acceso: Acceso,
        files: UploadForm,
    ) -> ApiOutcome<Value> {
        let body = self.envelope(entity_key, payload, acceso)?;
        let form = files.text(TRANSACTION_FIELD, body.to_string());
        debug!(entity = entity_key, endpoint, "Running upload");
        let result = self.api.upload(endpoint, form, true).await;
        finish(entity_key, endpoint, result)
    }
}

fn finish(entity_key: &str, endpoint: &str, result: TransportResult) -> ApiOutcome<Value> {
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(err) => {
            let classified = classify_failure(&err);
            warn!(
                entity = entity_key,
                endpoint,
                status = err.status,
                kind = %classified.kind,
                "Transaction failed"
            );
            return Err(classified);
        }
    };

    if let Some(err) = classify_envelope(Some(&envelope)) {
        warn!(
            entity = entity_key,
            endpoint,
            kind = %err.kind,
            reason = %err.message,
            "Backend rejected transaction"
        );
        return Err(err);
    }
    Ok(wrap_success(success_payload(envelope)))
}

/// The rows of a list envelope, or the whole envelope for mutations
fn success_payload(envelope: Value) -> Value {
    match envelope {
        Value::Object(mut map) if map.contains_key("array") => {
            map.remove("array").unwrap_or_default()
        }
        other => other,
    }
}

/// Decode a wrapped payload into a typed value
pub fn decode<T: DeserializeOwned>(response: SuccessResponse<Value>) -> ApiOutcome<T> {
    serde_json::from_value(response.array)
        .map(wrap_success)
        .map_err(|e| {
            warn!(error = %e, "Payload does not match the expected shape");
            ErrorResponse::from_kind(ErrorKind::MalformedResponse)
        })
}
