//! Calendar event operations

use shared::models::EventoCalendario;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "evento",
    label: "eventos del calendario",
    permiso: 5,
    create: Operation::post("calendario/eventos/crear"),
    edit: Operation::post("calendario/eventos/editar"),
    list: Operation::post("calendario/eventos/listar"),
    import: None,
};

pub type CalendarioApi<'a> = EntityApi<'a, EventoCalendario>;
