//! Vacation request operations

use shared::models::Vacacion;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "vacacion",
    label: "vacaciones",
    permiso: 11,
    create: Operation::post("vacaciones/crear"),
    edit: Operation::post("vacaciones/editar"),
    list: Operation::post("vacaciones/listar"),
    import: None,
};

pub type VacacionesApi<'a> = EntityApi<'a, Vacacion>;
