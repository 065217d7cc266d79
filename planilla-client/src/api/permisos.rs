//! Leave permission operations

use shared::models::Permiso;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "permiso",
    label: "permisos",
    permiso: 6,
    create: Operation::post("permisos/crear"),
    edit: Operation::post("permisos/editar"),
    list: Operation::post("permisos/listar"),
    import: None,
};

pub type PermisosApi<'a> = EntityApi<'a, Permiso>;
