//! Company record

use crate::validation::{validate_cedula, validate_not_blank, validate_telefono};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Empresa {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empresa: Option<i64>,
    #[validate(custom(function = "validate_not_blank"), length(max = 150))]
    pub nombre_comercial_empresa: String,
    #[validate(length(max = 150))]
    pub nombre_razon_social_empresa: String,
    #[validate(custom(function = "validate_cedula"))]
    pub cedula_juridica_empresa: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub correo_contacto_empresa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_telefono"))]
    pub telefono_contacto_empresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub direccion_empresa: Option<String>,
    #[serde(default = "default_activa")]
    pub estado_empresa: bool,
}

fn default_activa() -> bool {
    true
}
