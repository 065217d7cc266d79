//! Per-entity operations
//!
//! Each module is configuration for [`EntityApi`]: entity key, endpoints,
//! permission id. The request/classify/wrap logic lives once in
//! [`crate::transaction`].

pub mod aumentos;
pub mod bonificaciones;
pub mod calendario;
pub mod clientes;
pub mod deducciones;
pub mod empleados;
pub mod empresas;
mod entity;
pub mod horas_extra;
pub mod permisos;
pub mod planillas;
pub mod vacaciones;

pub use entity::{Accion, EntityApi, EntityEndpoints, Operation};
