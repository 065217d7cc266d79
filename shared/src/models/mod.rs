//! Domain payloads
//!
//! The backend owns these records. Field names mirror its column names; the
//! client only checks presence and format before submitting.

pub mod ajustes;
pub mod calendario;
pub mod cliente;
pub mod empleado;
pub mod empresa;
pub mod permiso;
pub mod planilla;
pub mod vacacion;

pub use ajustes::{Aumento, Bonificacion, Deduccion, HoraExtra, TipoHoraExtra};
pub use calendario::EventoCalendario;
pub use cliente::Cliente;
pub use empleado::Empleado;
pub use empresa::Empresa;
pub use permiso::Permiso;
pub use planilla::{CambioEstadoPlanilla, Planilla, PlanillaEstado};
pub use vacacion::Vacacion;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for list operations: optional scoping filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FiltroListado {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empresa: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empleado: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_planilla: Option<i64>,
}

impl FiltroListado {
    pub fn empresa(id_empresa: i64) -> Self {
        Self {
            id_empresa: Some(id_empresa),
            ..Default::default()
        }
    }

    pub fn empleado(id_empleado: i64) -> Self {
        Self {
            id_empleado: Some(id_empleado),
            ..Default::default()
        }
    }
}
