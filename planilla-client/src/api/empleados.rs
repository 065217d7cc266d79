//! Employee operations
//!
//! Employees can also be imported in bulk from a spreadsheet.

use shared::models::Empleado;

use super::entity::{EntityApi, EntityEndpoints, Operation};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints {
    key: "empleado",
    label: "empleados",
    permiso: 1,
    create: Operation::post("empleados/crear"),
    edit: Operation::post("empleados/editar"),
    list: Operation::post("empleados/listar"),
    import: Some(Operation::post("empleados/importar")),
};

pub type EmpleadosApi<'a> = EntityApi<'a, Empleado>;
