//! Client record

use crate::validation::{validate_cedula, validate_not_blank, validate_telefono};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<i64>,
    #[validate(custom(function = "validate_not_blank"), length(max = 150))]
    pub nombre_cliente: String,
    #[validate(custom(function = "validate_cedula"))]
    pub identificacion_cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Correo electrónico inválido"))]
    pub correo_cliente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_telefono"))]
    pub telefono_cliente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empresa: Option<i64>,
}
