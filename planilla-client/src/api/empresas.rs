//! Company operations

use shared::models::Empresa;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "empresa",
    label: "empresas",
    permiso: 2,
    create: Operation::post("empresas/crear"),
    edit: Operation::post("empresas/editar"),
    list: Operation::post("empresas/listar"),
    import: None,
};

pub type EmpresasApi<'a> = EntityApi<'a, Empresa>;
