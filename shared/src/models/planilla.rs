//! Payroll run ("planilla") record

use crate::validation::{date_range_error, validate_not_blank};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Lifecycle status of a payroll run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanillaEstado {
    #[serde(rename = "En Proceso")]
    EnProceso,
    Activa,
    Cerrada,
    Procesada,
    Cancelada,
}

impl PlanillaEstado {
    pub const ALL: [PlanillaEstado; 5] = [
        PlanillaEstado::EnProceso,
        PlanillaEstado::Activa,
        PlanillaEstado::Cerrada,
        PlanillaEstado::Procesada,
        PlanillaEstado::Cancelada,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PlanillaEstado::EnProceso => "En Proceso",
            PlanillaEstado::Activa => "Activa",
            PlanillaEstado::Cerrada => "Cerrada",
            PlanillaEstado::Procesada => "Procesada",
            PlanillaEstado::Cancelada => "Cancelada",
        }
    }

    /// Bootstrap colour used for the status badge
    pub const fn badge_color(&self) -> &'static str {
        match self {
            PlanillaEstado::EnProceso => "warning",
            PlanillaEstado::Activa => "success",
            PlanillaEstado::Cerrada => "secondary",
            PlanillaEstado::Procesada => "primary",
            PlanillaEstado::Cancelada => "danger",
        }
    }
}

impl fmt::Display for PlanillaEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Estado de planilla desconocido: {0}")]
pub struct UnknownEstado(pub String);

impl FromStr for PlanillaEstado {
    type Err = UnknownEstado;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|estado| estado.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEstado(s.to_string()))
    }
}

/// Payroll run scoped to a company and a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_periodo"))]
pub struct Planilla {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_planilla_gestor: Option<i64>,
    pub id_empresa: i64,
    #[validate(custom(function = "validate_not_blank"))]
    pub tipo_planilla: String,
    pub fecha_inicio_planilla: NaiveDate,
    pub fecha_fin_planilla: NaiveDate,
    pub estado_planilla: PlanillaEstado,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub descripcion_planilla: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn validate_periodo(planilla: &Planilla) -> Result<(), ValidationError> {
    if planilla.fecha_inicio_planilla > planilla.fecha_fin_planilla {
        return Err(date_range_error());
    }
    Ok(())
}

/// Payload for moving a payroll run to another status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CambioEstadoPlanilla {
    pub id_planilla_gestor: i64,
    pub estado_planilla: PlanillaEstado,
}
