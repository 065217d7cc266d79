//! Deduction operations

use shared::models::Deduccion;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "deduccion",
    label: "deducciones",
    permiso: 9,
    create: Operation::post("deducciones/crear"),
    edit: Operation::post("deducciones/editar"),
    list: Operation::post("deducciones/listar"),
    import: None,
};

pub type DeduccionesApi<'a> = EntityApi<'a, Deduccion>;
