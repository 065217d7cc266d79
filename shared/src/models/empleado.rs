//! Employee ("socio") record

use crate::validation::{validate_cedula, validate_not_blank, validate_positive, validate_telefono};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Employee managed by a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Empleado {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empleado_gestor: Option<i64>,
    #[validate(
        length(max = 150, message = "El nombre es demasiado largo"),
        custom(function = "validate_not_blank")
    )]
    pub nombre_completo_empleado_gestor: String,
    #[validate(custom(function = "validate_cedula"))]
    pub numero_identificacion_empleado_gestor: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub correo_empleado_gestor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_telefono"))]
    pub telefono_empleado_gestor: Option<String>,
    #[validate(custom(function = "validate_positive"))]
    pub salario_base_empleado_gestor: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empresa: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puesto_empleado_gestor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_ingreso_empleado_gestor: Option<NaiveDate>,
    #[serde(default = "default_activo")]
    pub estado_empleado_gestor: bool,
    /// Columns this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_activo() -> bool {
    true
}
