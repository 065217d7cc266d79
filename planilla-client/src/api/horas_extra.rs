//! Overtime operations

use shared::models::HoraExtra;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "horas_extra",
    label: "horas extra",
    permiso: 10,
    create: Operation::post("horas-extra/crear"),
    edit: Operation::post("horas-extra/editar"),
    list: Operation::post("horas-extra/listar"),
    import: None,
};

pub type HorasExtraApi<'a> = EntityApi<'a, HoraExtra>;
