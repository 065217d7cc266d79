//! Field checks run before a form is submitted
//!
//! These only give early feedback; the backend remains the authority. The
//! functions plug into `#[validate(custom(function = ...))]`.

use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

// ── Patterns ────────────────────────────────────────────────────────

/// National id: `1-2345-6789`, `123456789`, or a 10-12 digit legal/foreign id
static CEDULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d-?\d{4}-?\d{4}|\d{10,12})$").expect("cedula pattern")
});

/// Local phone, optional `+506` prefix: `8888-8888`, `+506 88888888`
static TELEFONO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+506\s?)?\d{4}-?\d{4}$").expect("telefono pattern")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validate a national id number
pub fn validate_cedula(value: &str) -> Result<(), ValidationError> {
    if CEDULA_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(error("cedula", "Número de cédula inválido"))
    }
}

/// Validate a phone number
pub fn validate_telefono(value: &str) -> Result<(), ValidationError> {
    if TELEFONO_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(error("telefono", "Número de teléfono inválido"))
    }
}

/// Validate that an amount (salary, bonus, deduction) is strictly positive
pub fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(error("positive", "El monto debe ser mayor a cero"))
    }
}

/// Validate that a required text is not blank
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("required", "Este campo es obligatorio"))
    } else {
        Ok(())
    }
}

/// Error for a `fecha_inicio` that falls after `fecha_fin`
pub fn date_range_error() -> ValidationError {
    error(
        "date_range",
        "La fecha de inicio debe ser anterior a la fecha de fin",
    )
}

/// Collapse validation errors into the single message a form shows
///
/// Fields are visited in name order so the message is stable.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, &Vec<ValidationError>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Campo inválido: {}", field),
            })
        })
        .unwrap_or_else(|| crate::error::messages::VALIDATION_ERROR.to_string())
}
