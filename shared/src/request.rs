//! Request envelopes sent to the backend
//!
//! Mutations send a transaction `{user, <entity>: {...}, acceso}`; grid
//! fetches add [`CommonRequestData`] and paging fields on top of it.

use crate::error::messages;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Caller identity attached to every transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_empresa: Option<i64>,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            rol: None,
            id_empresa: None,
        }
    }

    pub fn with_rol(mut self, rol: i64) -> Self {
        self.rol = Some(rol);
        self
    }

    pub fn with_empresa(mut self, id_empresa: i64) -> Self {
        self.id_empresa = Some(id_empresa);
        self
    }
}

/// Authorization hint forwarded untouched to the backend
///
/// The client never enforces it. `details` only feeds the fallback message
/// when the backend answers 403.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Acceso {
    #[serde(rename = "type")]
    pub tipo: i32,
    pub permiso: i32,
    #[serde(default)]
    pub details: String,
}

impl Acceso {
    pub fn new(tipo: i32, permiso: i32, details: impl Into<String>) -> Self {
        Self {
            tipo,
            permiso,
            details: details.into(),
        }
    }

    /// Message shown when the backend rejects the call with 403 and no detail
    pub fn denied_message(&self) -> String {
        let details = self.details.trim();
        if details.is_empty() {
            messages::NO_PERMISSION.to_string()
        } else {
            format!("No tiene permisos para {}", details)
        }
    }
}

/// Transaction envelope: `{user, <entity_key>: payload, acceso}`
#[derive(Debug, Clone, PartialEq)]
pub struct Transaccion<T> {
    pub user: User,
    pub entity_key: &'static str,
    pub payload: T,
    pub acceso: Acceso,
}

impl<T> Transaccion<T> {
    pub fn new(user: User, entity_key: &'static str, payload: T, acceso: Acceso) -> Self {
        Self {
            user,
            entity_key,
            payload,
            acceso,
        }
    }
}

impl<T: Serialize> Serialize for Transaccion<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("user", &self.user)?;
        map.serialize_entry(self.entity_key, &self.payload)?;
        map.serialize_entry("acceso", &self.acceso)?;
        map.end()
    }
}

/// Placeholder token the backend receives on every grid fetch
///
/// Kept as-is: whether the backend reads it is unknown.
pub const COMMON_TOKEN_ACCESS: &str = "1234567890";

/// Static fields merged into every grid request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRequestData {
    pub token_access: String,
    pub database: String,
    #[serde(rename = "sqlQuery")]
    pub sql_query: String,
    #[serde(rename = "type")]
    pub tipo: String,
}

impl CommonRequestData {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            token_access: COMMON_TOKEN_ACCESS.to_string(),
            database: database.into(),
            sql_query: String::new(),
            tipo: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaccion_serializes_entity_key() {
        let tx = Transaccion::new(
            User::new(7).with_rol(2),
            "empleado",
            json!({"nombre_completo_empleado_gestor": "Ana Mora"}),
            Acceso::new(1, 3, "crear empleados"),
        );

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            value,
            json!({
                "user": {"id": 7, "rol": 2},
                "empleado": {"nombre_completo_empleado_gestor": "Ana Mora"},
                "acceso": {"type": 1, "permiso": 3, "details": "crear empleados"}
            })
        );
    }

    #[test]
    fn test_user_optional_fields_skipped() {
        let value = serde_json::to_value(User::new(1)).unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn test_acceso_denied_message() {
        assert_eq!(
            Acceso::new(1, 1, "ver planillas").denied_message(),
            "No tiene permisos para ver planillas"
        );
        assert_eq!(
            Acceso::default().denied_message(),
            "No tiene permisos para realizar esta acción"
        );
    }

    #[test]
    fn test_common_request_data() {
        let value = serde_json::to_value(CommonRequestData::new("planilla_dev")).unwrap();
        assert_eq!(
            value,
            json!({
                "token_access": "1234567890",
                "database": "planilla_dev",
                "sqlQuery": "",
                "type": ""
            })
        );
    }
}
