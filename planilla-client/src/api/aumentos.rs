//! Salary raise operations

use shared::models::Aumento;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "aumento",
    label: "aumentos",
    permiso: 7,
    create: Operation::post("aumentos/crear"),
    edit: Operation::post("aumentos/editar"),
    list: Operation::post("aumentos/listar"),
    import: None,
};

pub type AumentosApi<'a> = EntityApi<'a, Aumento>;
