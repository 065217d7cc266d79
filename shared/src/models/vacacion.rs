//! Vacation request record

use crate::validation::date_range_error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rango"))]
pub struct Vacacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_vacacion: Option<i64>,
    pub id_empleado: i64,
    pub fecha_inicio_vacacion: NaiveDate,
    pub fecha_fin_vacacion: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub dias_solicitados: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub observaciones_vacacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_vacacion: Option<String>,
}

impl Vacacion {
    /// Calendar days covered by the request, both ends included
    pub fn dias_calendario(&self) -> i64 {
        (self.fecha_fin_vacacion - self.fecha_inicio_vacacion).num_days() + 1
    }
}

fn validate_rango(vacacion: &Vacacion) -> Result<(), ValidationError> {
    if vacacion.fecha_inicio_vacacion > vacacion.fecha_fin_vacacion {
        return Err(date_range_error());
    }
    Ok(())
}
