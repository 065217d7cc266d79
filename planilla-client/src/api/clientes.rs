//! Client operations

use shared::models::Cliente;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "cliente",
    label: "clientes",
    permiso: 3,
    create: Operation::post("clientes/crear"),
    edit: Operation::post("clientes/editar"),
    list: Operation::post("clientes/listar"),
    import: None,
};

pub type ClientesApi<'a> = EntityApi<'a, Cliente>;
