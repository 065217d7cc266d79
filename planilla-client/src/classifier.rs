//! Response classification
//!
//! Turns a backend envelope into "no error" (`None`) or the uniform
//! [`ErrorResponse`]. The checks run in a fixed order and the first match
//! wins:
//!
//! 1. missing or falsy envelope
//! 2. `status == 500` (duplicate-key text passed through verbatim)
//! 3. `respuesta.status == 404`
//! 4. `respuesta.status == 403`
//! 5. `respuesta.status == 422`
//! 6. `respuesta.error` containing "Duplicate entry"
//! 7. any other `respuesta.error`
//!
//! Duplicate-key text is recognised in two places (`error.details` under a
//! 500, and `respuesta.error`); both paths are kept.

use serde_json::Value;
use shared::error::{DUPLICATE_ENTRY_MARKER, ErrorKind, ErrorResponse, make_error, messages};

use crate::transport::{TransportError, TransportResult};

/// JavaScript-style truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a numeric status, accepting `"404"` as well as `404`
pub(crate) fn status_of(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty string at `value`, if any
fn text_of(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Human-readable form of an arbitrary error value
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("details")
            .or_else(|| obj.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

/// Classify a backend envelope
pub fn classify_envelope(envelope: Option<&Value>) -> Option<ErrorResponse> {
    let envelope = match envelope {
        Some(v) if is_truthy(v) => v,
        _ => return Some(ErrorResponse::invalid_response()),
    };

    if status_of(envelope.get("status")) == Some(500) {
        let details = text_of(envelope.pointer("/error/details"));
        return Some(match details {
            Some(d) if d.contains(DUPLICATE_ENTRY_MARKER) => {
                ErrorResponse::with_kind(ErrorKind::DuplicateEntry, d)
            }
            Some(d) => ErrorResponse::with_kind(ErrorKind::ServerError, d),
            None => ErrorResponse::with_kind(ErrorKind::ServerError, messages::INTERNAL_SERVER_ERROR),
        });
    }

    let respuesta = envelope.get("respuesta")?;
    let detail = text_of(respuesta.pointer("/error/details"));

    match status_of(respuesta.get("status")) {
        Some(404) => {
            return Some(ErrorResponse::with_kind(
                ErrorKind::NotFound,
                detail.unwrap_or(messages::NOT_FOUND),
            ));
        }
        Some(403) => {
            return Some(ErrorResponse::with_kind(
                ErrorKind::PermissionDenied,
                detail.unwrap_or(messages::ACCESS_DENIED),
            ));
        }
        Some(422) => {
            let message = text_of(respuesta.get("errorMessage"))
                .or(detail)
                .unwrap_or(messages::VALIDATION_ERROR);
            return Some(ErrorResponse::with_kind(ErrorKind::Validation, message));
        }
        _ => {}
    }

    match respuesta.get("error") {
        Some(Value::String(s)) if s.contains(DUPLICATE_ENTRY_MARKER) => {
            Some(ErrorResponse::with_kind(ErrorKind::DuplicateEntry, s.clone()))
        }
        Some(err) if !err.is_null() => Some(make_error(stringify(err))),
        _ => None,
    }
}

/// Classify a transport-shaped value `{data: envelope}`
pub fn classify_response(response: &Value) -> Option<ErrorResponse> {
    classify_envelope(response.get("data"))
}

/// Classify a failed transport call
///
/// An error body that is itself an envelope is classified like any other
/// envelope, so a 403 answered with HTTP 403 reads the same as one answered
/// inside a 200. Otherwise the transport message is surfaced.
pub fn classify_failure(err: &TransportError) -> ErrorResponse {
    if let Some(details) = err.details.as_ref().filter(|d| d.is_object())
        && let Some(classified) = classify_envelope(Some(details))
    {
        return classified;
    }
    let kind = if err.is_validation_error {
        ErrorKind::MalformedResponse
    } else {
        ErrorKind::Transport
    };
    ErrorResponse::with_kind(kind, err.message.clone())
}

/// Classify the outcome of a transport call
pub fn classify_result(result: &TransportResult) -> Option<ErrorResponse> {
    match result {
        Ok(envelope) => classify_envelope(Some(envelope)),
        Err(err) => Some(classify_failure(err)),
    }
}
