//! Calendar event record

use crate::validation::{date_range_error, validate_not_blank};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rango"))]
pub struct EventoCalendario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_evento: Option<i64>,
    #[validate(custom(function = "validate_not_blank"), length(max = 150))]
    pub titulo_evento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub descripcion_evento: Option<String>,
    pub fecha_inicio_evento: NaiveDateTime,
    pub fecha_fin_evento: NaiveDateTime,
    #[serde(default)]
    pub todo_el_dia: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_evento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empleado: Option<i64>,
}

fn validate_rango(evento: &EventoCalendario) -> Result<(), ValidationError> {
    if evento.fecha_inicio_evento > evento.fecha_fin_evento {
        return Err(date_range_error());
    }
    Ok(())
}
