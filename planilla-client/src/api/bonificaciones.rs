//! Bonus operations

use shared::models::Bonificacion;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "bonificacion",
    label: "bonificaciones",
    permiso: 8,
    create: Operation::post("bonificaciones/crear"),
    edit: Operation::post("bonificaciones/editar"),
    list: Operation::post("bonificaciones/listar"),
    import: None,
};

pub type BonificacionesApi<'a> = EntityApi<'a, Bonificacion>;
