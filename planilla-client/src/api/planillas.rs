//! Payroll run operations

use serde_json::Value;
use shared::ApiOutcome;
use shared::models::{CambioEstadoPlanilla, Planilla};

use super::entity::{Accion, EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "planilla",
    label: "planillas",
    permiso: 4,
    create: Operation::post("planillas/crear"),
    edit: Operation::post("planillas/editar"),
    list: Operation::post("planillas/listar"),
    import: Some(Operation::post("planillas/importar")),
};

/// Status changes go through their own endpoint
pub static CHANGE_STATUS: Operation = Operation::post("planillas/estado");

pub type PlanillasApi<'a> = EntityApi<'a, Planilla>;

impl EntityApi<'_, Planilla> {
    /// Move a payroll run to another lifecycle status
    pub async fn change_status(&self, cambio: &CambioEstadoPlanilla) -> ApiOutcome<Value> {
        self.runner()
            .run_validated(
                ENDPOINTS.key,
                CHANGE_STATUS.endpoint,
                cambio,
                CHANGE_STATUS.method.clone(),
                self.acceso_for(Accion::CambiarEstado),
            )
            .await
    }
}
