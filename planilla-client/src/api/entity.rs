//! Entity operations expressed as configuration
//!
//! An entity is its transaction key, its endpoints and the permission id the
//! backend checks. [`EntityApi`] turns that into create/edit/list calls on
//! top of [`TransactionRunner`].

use std::marker::PhantomData;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::ErrorResponse;
use shared::models::FiltroListado;
use shared::{Acceso, ApiOutcome};
use validator::Validate;

use crate::transaction::{TransactionRunner, decode};
use crate::transport::UploadForm;

/// Action code sent in `acceso.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Accion {
    Crear = 1,
    Editar = 2,
    Listar = 3,
    CambiarEstado = 4,
    Importar = 5,
}

impl Accion {
    pub const fn verb(&self) -> &'static str {
        match self {
            Accion::Crear => "crear",
            Accion::Editar => "editar",
            Accion::Listar => "ver",
            Accion::CambiarEstado => "cambiar el estado de",
            Accion::Importar => "importar",
        }
    }
}

/// Endpoint and method of one operation
#[derive(Debug, Clone)]
pub struct Operation {
    pub endpoint: &'static str,
    pub method: Method,
}

impl Operation {
    pub const fn post(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            method: Method::POST,
        }
    }
}

/// Static description of an entity's operations
#[derive(Debug, Clone)]
pub struct EntityEndpoints {
    /// Key the payload travels under in the transaction
    pub key: &'static str,
    /// Plural label used in permission messages
    pub label: &'static str,
    /// Permission id forwarded in `acceso.permiso`
    pub permiso: i32,
    pub create: Operation,
    pub edit: Operation,
    pub list: Operation,
    pub import: Option<Operation>,
}

impl EntityEndpoints {
    /// Default authorization hint for an action on this entity
    pub fn acceso(&self, accion: Accion) -> Acceso {
        Acceso::new(
            accion as i32,
            self.permiso,
            format!("{} {}", accion.verb(), self.label),
        )
    }
}

/// Typed operations for one entity
pub struct EntityApi<'a, T> {
    runner: &'a TransactionRunner,
    endpoints: &'static EntityEndpoints,
    acceso: Option<Acceso>,
    _payload: PhantomData<fn() -> T>,
}

impl<'a, T> EntityApi<'a, T>
where
    T: Serialize + DeserializeOwned + Validate + Sync,
{
    pub fn new(runner: &'a TransactionRunner, endpoints: &'static EntityEndpoints) -> Self {
        Self {
            runner,
            endpoints,
            acceso: None,
            _payload: PhantomData,
        }
    }

    /// Override the authorization hint for every call through this handle
    pub fn with_acceso(mut self, acceso: Acceso) -> Self {
        self.acceso = Some(acceso);
        self
    }

    pub fn endpoints(&self) -> &'static EntityEndpoints {
        self.endpoints
    }

    pub(crate) fn runner(&self) -> &'a TransactionRunner {
        self.runner
    }

    pub(crate) fn acceso_for(&self, accion: Accion) -> Acceso {
        self.acceso
            .clone()
            .unwrap_or_else(|| self.endpoints.acceso(accion))
    }

    pub async fn create(&self, payload: &T) -> ApiOutcome<Value> {
        let op = &self.endpoints.create;
        self.runner
            .run_validated(
                self.endpoints.key,
                op.endpoint,
                payload,
                op.method.clone(),
                self.acceso_for(Accion::Crear),
            )
            .await
    }

    pub async fn edit(&self, payload: &T) -> ApiOutcome<Value> {
        let op = &self.endpoints.edit;
        self.runner
            .run_validated(
                self.endpoints.key,
                op.endpoint,
                payload,
                op.method.clone(),
                self.acceso_for(Accion::Editar),
            )
            .await
    }

    /// List records as raw rows
    pub async fn list(&self, filtro: &FiltroListado) -> ApiOutcome<Value> {
        let op = &self.endpoints.list;
        self.runner
            .run_transaction(
                self.endpoints.key,
                op.endpoint,
                filtro,
                op.method.clone(),
                self.acceso_for(Accion::Listar),
            )
            .await
    }

    /// List records decoded into the entity type
    pub async fn list_typed(&self, filtro: &FiltroListado) -> ApiOutcome<Vec<T>> {
        decode(self.list(filtro).await?)
    }

    /// Upload a file (e.g. a spreadsheet import) for this entity
    pub async fn import(&self, payload: &Value, files: UploadForm) -> ApiOutcome<Value> {
        let Some(op) = &self.endpoints.import else {
            return Err(ErrorResponse::validation(format!(
                "No se pueden importar {}",
                self.endpoints.label
            )));
        };
        self.runner
            .run_upload(
                self.endpoints.key,
                op.endpoint,
                payload,
                self.acceso_for(Accion::Importar),
                files,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PRUEBA: EntityEndpoints = EntityEndpoints {
        key: "prueba",
        label: "pruebas",
        permiso: 99,
        create: Operation::post("pruebas/crear"),
        edit: Operation::post("pruebas/editar"),
        list: Operation::post("pruebas/listar"),
        import: None,
    };

    #[test]
    fn test_default_acceso() {
        let acceso = PRUEBA.acceso(Accion::Crear);
        assert_eq!(acceso.tipo, 1);
        assert_eq!(acceso.permiso, 99);
        assert_eq!(acceso.details, "crear pruebas");
        assert_eq!(PRUEBA.acceso(Accion::Listar).details, "ver pruebas");
    }

    #[test]
    fn test_every_operation_is_post() {
        use crate::api::*;

        let entities = [
            &aumentos::ENDPOINTS,
            &bonificaciones::ENDPOINTS,
            &calendario::ENDPOINTS,
            &clientes::ENDPOINTS,
            &deducciones::ENDPOINTS,
            &empleados::ENDPOINTS,
            &empresas::ENDPOINTS,
            &horas_extra::ENDPOINTS,
            &permisos::ENDPOINTS,
            &planillas::ENDPOINTS,
            &vacaciones::ENDPOINTS,
            &PRUEBA,
        ];
        for endpoints in entities {
            let ops = [&endpoints.create, &endpoints.edit, &endpoints.list];
            for op in ops.into_iter().chain(endpoints.import.as_ref()) {
                assert_eq!(op.method, Method::POST, "{}", op.endpoint);
            }
        }
        assert_eq!(planillas::CHANGE_STATUS.method, Method::POST);
    }
}
