//! Leave permission record

use crate::validation::{date_range_error, validate_not_blank};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rango"))]
pub struct Permiso {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_permiso: Option<i64>,
    pub id_empleado: i64,
    #[validate(custom(function = "validate_not_blank"))]
    pub tipo_permiso: String,
    pub fecha_inicio_permiso: NaiveDate,
    pub fecha_fin_permiso: NaiveDate,
    #[validate(length(max = 500))]
    pub motivo_permiso: String,
    #[serde(default)]
    pub con_goce_salario: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_permiso: Option<String>,
}

fn validate_rango(permiso: &Permiso) -> Result<(), ValidationError> {
    if permiso.fecha_inicio_permiso > permiso.fecha_fin_permiso {
        return Err(date_range_error());
    }
    Ok(())
}
