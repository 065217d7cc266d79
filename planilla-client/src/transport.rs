//! Transport client
//!
//! One HTTP call per logical operation. Every outcome, including network
//! failures and unusable bodies, resolves to a [`TransportResult`]; nothing
//! here panics or bubbles an error past the caller. Single attempt, no
//! retries.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use shared::error::messages;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::{CredentialSource, bearer_header};
use crate::error::{ClientError, ClientResult};

/// Content type of every JSON request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status of every failed call, including non-2xx answers
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Status reported for a body that is JSON but not an object
pub const VALIDATION_ERROR_STATUS: u16 = 422;

/// Failed transport outcome
///
/// Serializes as `{ok:false, errorMessage, errorDetails, status, isValidationError}`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    /// Parsed error body from the backend, when there was one
    pub details: Option<Value>,
    pub status: u16,
    pub is_validation_error: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            details: None,
            status,
            is_validation_error: false,
        }
    }

    /// Response body was not a JSON object
    pub fn invalid_format() -> Self {
        Self {
            message: messages::INVALID_RESPONSE_FORMAT.to_string(),
            details: None,
            status: VALIDATION_ERROR_STATUS,
            is_validation_error: true,
        }
    }

    fn network(err: &reqwest::Error) -> Self {
        Self::new(
            format!("{}: {}", messages::NETWORK_ERROR, err),
            DEFAULT_ERROR_STATUS,
        )
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl Serialize for TransportError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("ok", &false)?;
        map.serialize_entry("errorMessage", &self.message)?;
        map.serialize_entry("errorDetails", &self.details)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("isValidationError", &self.is_validation_error)?;
        map.end()
    }
}

/// Outcome of one transport call: the response envelope or the failure
pub type TransportResult = Result<Value, TransportError>;

/// One file in a multipart upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

/// Multipart form: text fields plus file parts
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    fields: Vec<(String, String)>,
    files: Vec<UploadFile>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a JSON-encoded text field (e.g. the `transaccion` that goes with a file)
    pub fn json<T: Serialize>(self, name: impl Into<String>, value: &T) -> ClientResult<Self> {
        let encoded = serde_json::to_string(value)?;
        Ok(self.text(name, encoded))
    }

    pub fn file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.files.push(UploadFile {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
            mime: None,
        });
        self
    }

    pub fn file_with_mime(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime: impl Into<String>,
    ) -> Self {
        self.files.push(UploadFile {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
            mime: Some(mime.into()),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }

    fn into_multipart(self) -> ClientResult<reqwest::multipart::Form> {
        use reqwest::multipart::{Form, Part};

        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = file.mime {
                part = part
                    .mime_str(&mime)
                    .map_err(|e| ClientError::Upload(format!("{}: {}", mime, e)))?;
            }
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

/// Transport seam used by the transaction runner and the grid
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Send a JSON request
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: &Value,
        requires_auth: bool,
    ) -> TransportResult;

    /// Send a JSON POST
    async fn post(&self, endpoint: &str, body: &Value, requires_auth: bool) -> TransportResult {
        self.request(Method::POST, endpoint, body, requires_auth)
            .await
    }

    /// Send a multipart upload
    async fn upload(&self, endpoint: &str, form: UploadForm, requires_auth: bool)
    -> TransportResult;

    fn base_url(&self) -> &str;
}

/// Network API client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkApiClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialSource>,
}

impl NetworkApiClient {
    /// Create a client for the configured backend
    pub fn new<C>(config: &ClientConfig, credentials: C) -> ClientResult<Self>
    where
        C: CredentialSource + 'static,
    {
        Self::with_credentials(config, Arc::new(credentials))
    }

    /// Create a client sharing an existing credential source
    pub fn with_credentials(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialSource> {
        &self.credentials
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn auth_header(&self, requires_auth: bool) -> Option<String> {
        if requires_auth {
            bearer_header(self.credentials.as_ref())
        } else {
            None
        }
    }

    async fn handle_response(response: Response) -> TransportResult {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(&e))?;

        if !status.is_success() {
            let details = serde_json::from_str::<Value>(&text)
                .ok()
                .or_else(|| (!text.is_empty()).then(|| Value::String(text)));
            warn!(status = status.as_u16(), "Request failed");
            let err = TransportError::new(
                format!("La solicitud falló con el código de estado {}", status.as_u16()),
                DEFAULT_ERROR_STATUS,
            );
            return Err(match details {
                Some(d) => err.with_details(d),
                None => err,
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "Response body is not JSON");
            TransportError::new(
                format!("{}: {}", messages::INVALID_RESPONSE_FORMAT, e),
                DEFAULT_ERROR_STATUS,
            )
        })?;

        if !value.is_object() {
            warn!("Response body is not a JSON object");
            return Err(TransportError::invalid_format());
        }
        Ok(value)
    }
}

#[async_trait]
impl ApiClient for NetworkApiClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: &Value,
        requires_auth: bool,
    ) -> TransportResult {
        let url = self.url(endpoint);
        let mut req = self.client.request(method.clone(), &url);
        if method != Method::GET {
            let payload = serde_json::to_vec(body)
                .map_err(|e| TransportError::new(e.to_string(), DEFAULT_ERROR_STATUS))?;
            req = req.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(payload);
        }
        if let Some(auth) = self.auth_header(requires_auth) {
            req = req.header(AUTHORIZATION, auth);
        }

        debug!(%method, %url, "Sending request");
        match req.send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => {
                warn!(%method, %url, error = %e, "Request could not be sent");
                Err(TransportError::network(&e))
            }
        }
    }

    async fn upload(
        &self,
        endpoint: &str,
        form: UploadForm,
        requires_auth: bool,
    ) -> TransportResult {
        let url = self.url(endpoint);
        let form = form.into_multipart().map_err(|e| TransportError {
            message: e.to_string(),
            details: None,
            status: VALIDATION_ERROR_STATUS,
            is_validation_error: true,
        })?;

        let mut req = self.client.post(&url).multipart(form);
        if let Some(auth) = self.auth_header(requires_auth) {
            req = req.header(AUTHORIZATION, auth);
        }

        debug!(%url, "Sending upload");
        match req.send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => {
                warn!(%url, error = %e, "Upload could not be sent");
                Err(TransportError::network(&e))
            }
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
