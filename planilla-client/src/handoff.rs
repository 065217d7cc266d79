//! Row hand-off between a list screen and its edit screen
//!
//! The list screen `put`s the selected row; the edit screen `take`s it once.
//! Each screen owns its own slot, so two screens never overwrite each
//! other's selection. Writing the same slot twice keeps the last row.

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Screens that hand a selected row to an edit view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Empleado,
    Planilla,
    Cliente,
    Aumento,
    Bonificacion,
    Deduccion,
    HorasExtra,
    Empresa,
    Vacacion,
}

impl Screen {
    /// Storage key the screen has always used for its selection
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Screen::Empleado => "selectedEmpleado",
            Screen::Planilla => "selectedPlanilla",
            Screen::Cliente => "selectedCliente",
            Screen::Aumento => "selectedAumento",
            Screen::Bonificacion => "selectedBonificacion",
            Screen::Deduccion => "selectedDeduccion",
            Screen::HorasExtra => "selectedHorasExtra",
            Screen::Empresa => "selectedEmpresa",
            Screen::Vacacion => "vacacionParaEditar",
        }
    }
}

/// In-memory hand-off slots, one per screen
#[derive(Debug, Default)]
pub struct HandoffStore {
    slots: DashMap<Screen, Value>,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash the selected row for `screen`
    pub fn put(&self, screen: Screen, row: Value) {
        tracing::debug!(key = screen.storage_key(), "Row handed off");
        self.slots.insert(screen, row);
    }

    /// Stash a typed record
    pub fn put_record<T: Serialize>(&self, screen: Screen, record: &T) -> Result<(), serde_json::Error> {
        self.put(screen, serde_json::to_value(record)?);
        Ok(())
    }

    /// Take the selected row, clearing the slot
    pub fn take(&self, screen: Screen) -> Option<Value> {
        self.slots.remove(&screen).map(|(_, row)| row)
    }

    /// Take the selected row as a typed record
    ///
    /// A row that does not decode is dropped and reported as absent.
    pub fn take_record<T: DeserializeOwned>(&self, screen: Screen) -> Option<T> {
        let row = self.take(screen)?;
        match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(key = screen.storage_key(), error = %e, "Handed-off row does not decode");
                None
            }
        }
    }

    /// Look at the selected row without consuming it
    pub fn peek(&self, screen: Screen) -> Option<Value> {
        self.slots.get(&screen).map(|row| row.value().clone())
    }

    pub fn clear(&self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::Vacacion;

    #[test]
    fn test_take_is_single_use() {
        let store = HandoffStore::new();
        store.put(Screen::Empleado, json!({"id_empleado_gestor": 5}));

        assert_eq!(store.peek(Screen::Empleado), Some(json!({"id_empleado_gestor": 5})));
        assert_eq!(store.take(Screen::Empleado), Some(json!({"id_empleado_gestor": 5})));
        assert!(store.take(Screen::Empleado).is_none());
    }

    #[test]
    fn test_screens_do_not_clobber() {
        let store = HandoffStore::new();
        store.put(Screen::Empleado, json!({"id": 1}));
        store.put(Screen::Planilla, json!({"id": 2}));
        store.put(Screen::Empleado, json!({"id": 3}));

        assert_eq!(store.take(Screen::Planilla), Some(json!({"id": 2})));
        assert_eq!(store.take(Screen::Empleado), Some(json!({"id": 3})));
    }

    #[test]
    fn test_typed_round_trip() {
        let store = HandoffStore::new();
        store.put(
            Screen::Vacacion,
            json!({
                "id_vacacion": 8,
                "id_empleado": 4,
                "fecha_inicio_vacacion": "2024-12-23",
                "fecha_fin_vacacion": "2024-12-27"
            }),
        );
        let vacacion: Vacacion = store.take_record(Screen::Vacacion).unwrap();
        assert_eq!(vacacion.id_vacacion, Some(8));

        store.put(Screen::Vacacion, json!({"id_vacacion": "x"}));
        assert!(store.take_record::<Vacacion>(Screen::Vacacion).is_none());
        assert!(store.peek(Screen::Vacacion).is_none());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(Screen::HorasExtra.storage_key(), "selectedHorasExtra");
        assert_eq!(Screen::Vacacion.storage_key(), "vacacionParaEditar");
    }
}
