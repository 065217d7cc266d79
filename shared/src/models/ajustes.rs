//! Payroll adjustments: raises, bonuses, deductions and overtime

use crate::validation::{validate_not_blank, validate_positive};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Salary raise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Aumento {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_aumento: Option<i64>,
    pub id_empleado: i64,
    #[validate(custom(function = "validate_positive"))]
    pub monto_aumento: Decimal,
    pub fecha_efectiva_aumento: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub motivo_aumento: Option<String>,
}

/// One-off bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Bonificacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_bonificacion: Option<i64>,
    pub id_empleado: i64,
    #[validate(custom(function = "validate_not_blank"))]
    pub tipo_bonificacion: String,
    #[validate(custom(function = "validate_positive"))]
    pub monto_bonificacion: Decimal,
    pub fecha_bonificacion: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub motivo_bonificacion: Option<String>,
}

/// Deduction applied to a payroll run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Deduccion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_deduccion: Option<i64>,
    pub id_empleado: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_planilla: Option<i64>,
    #[validate(custom(function = "validate_not_blank"))]
    pub tipo_deduccion: String,
    #[validate(custom(function = "validate_positive"))]
    pub monto_deduccion: Decimal,
    pub fecha_deduccion: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub motivo_deduccion: Option<String>,
}

/// Overtime rate class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoHoraExtra {
    /// Time and a half
    Sencilla,
    /// Double time (holidays, rest days)
    Doble,
}

impl TipoHoraExtra {
    pub fn factor(&self) -> Decimal {
        match self {
            TipoHoraExtra::Sencilla => Decimal::new(15, 1),
            TipoHoraExtra::Doble => Decimal::TWO,
        }
    }
}

/// Overtime worked on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HoraExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_hora_extra: Option<i64>,
    pub id_empleado: i64,
    pub fecha_hora_extra: NaiveDate,
    #[validate(custom(function = "validate_positive"))]
    pub cantidad_horas: Decimal,
    pub tipo_hora_extra: TipoHoraExtra,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub observaciones_hora_extra: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aumento_requires_positive_amount() {
        let mut aumento: Aumento = serde_json::from_value(json!({
            "id_empleado": 9,
            "monto_aumento": 25000,
            "fecha_efectiva_aumento": "2024-07-01"
        }))
        .unwrap();
        assert!(aumento.validate().is_ok());

        aumento.monto_aumento = Decimal::new(-1, 0);
        assert!(aumento.validate().is_err());
    }

    #[test]
    fn test_hora_extra_factor() {
        assert_eq!(TipoHoraExtra::Sencilla.factor(), Decimal::new(15, 1));
        assert_eq!(TipoHoraExtra::Doble.factor(), Decimal::TWO);
    }
}
