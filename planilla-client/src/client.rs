//! Client facade
//!
//! Owns one transport, one session and the in-memory stores, and hands out
//! per-entity APIs and grid configurations that share them.

use std::sync::Arc;

use crate::api::{
    EntityApi, aumentos, bonificaciones, calendario, clientes, deducciones, empleados, empresas,
    horas_extra, permisos, planillas, vacaciones,
};
use crate::config::ClientConfig;
use crate::credentials::CredentialSource;
use crate::error::ClientResult;
use crate::grid::{GridConfig, GridFeedback, GridStateStore};
use crate::handoff::HandoffStore;
use crate::session::Session;
use crate::transaction::TransactionRunner;
use crate::transport::{ApiClient, NetworkApiClient};

/// Payroll admin client
#[derive(Clone)]
pub struct PlanillaClient {
    config: ClientConfig,
    runner: TransactionRunner,
    handoff: Arc<HandoffStore>,
    grid_state: Arc<GridStateStore>,
}

impl PlanillaClient {
    /// Create a client talking to the configured backend
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialSource>) -> ClientResult<Self> {
        let api = NetworkApiClient::with_credentials(&config, credentials)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create a client over any transport
    pub fn with_api(config: ClientConfig, api: Arc<dyn ApiClient>) -> Self {
        Self {
            config,
            runner: TransactionRunner::new(api, Arc::new(Session::new())),
            handoff: Arc::new(HandoffStore::new()),
            grid_state: Arc::new(GridStateStore::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<Session> {
        self.runner.session()
    }

    pub fn api(&self) -> &Arc<dyn ApiClient> {
        self.runner.api()
    }

    pub fn runner(&self) -> &TransactionRunner {
        &self.runner
    }

    pub fn handoff(&self) -> &Arc<HandoffStore> {
        &self.handoff
    }

    pub fn grid_state(&self) -> &Arc<GridStateStore> {
        &self.grid_state
    }

    pub fn empleados(&self) -> empleados::EmpleadosApi<'_> {
        EntityApi::new(&self.runner, &empleados::ENDPOINTS)
    }

    pub fn empresas(&self) -> empresas::EmpresasApi<'_> {
        EntityApi::new(&self.runner, &empresas::ENDPOINTS)
    }

    pub fn clientes(&self) -> clientes::ClientesApi<'_> {
        EntityApi::new(&self.runner, &clientes::ENDPOINTS)
    }

    pub fn planillas(&self) -> planillas::PlanillasApi<'_> {
        EntityApi::new(&self.runner, &planillas::ENDPOINTS)
    }

    pub fn calendario(&self) -> calendario::CalendarioApi<'_> {
        EntityApi::new(&self.runner, &calendario::ENDPOINTS)
    }

    pub fn permisos(&self) -> permisos::PermisosApi<'_> {
        EntityApi::new(&self.runner, &permisos::ENDPOINTS)
    }

    pub fn aumentos(&self) -> aumentos::AumentosApi<'_> {
        EntityApi::new(&self.runner, &aumentos::ENDPOINTS)
    }

    pub fn bonificaciones(&self) -> bonificaciones::BonificacionesApi<'_> {
        EntityApi::new(&self.runner, &bonificaciones::ENDPOINTS)
    }

    pub fn deducciones(&self) -> deducciones::DeduccionesApi<'_> {
        EntityApi::new(&self.runner, &deducciones::ENDPOINTS)
    }

    pub fn horas_extra(&self) -> horas_extra::HorasExtraApi<'_> {
        EntityApi::new(&self.runner, &horas_extra::ENDPOINTS)
    }

    pub fn vacaciones(&self) -> vacaciones::VacacionesApi<'_> {
        EntityApi::new(&self.runner, &vacaciones::ENDPOINTS)
    }

    /// Grid for a list screen, wired to this client's transport, session
    /// user, database tag and state store
    pub fn grid(
        &self,
        table_id: impl Into<String>,
        endpoint: impl Into<String>,
        feedback: Arc<dyn GridFeedback>,
    ) -> GridConfig {
        GridConfig::new(
            table_id,
            endpoint,
            self.api().clone(),
            self.config.common_request_data(),
            feedback,
        )
        .with_user(self.session().current_user())
        .with_state_store(self.grid_state.clone())
    }
}

impl std::fmt::Debug for PlanillaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanillaClient")
            .field("base_url", &self.api().base_url())
            .field("environment", &self.config.environment)
            .field("authenticated", &self.session().is_authenticated())
            .finish()
    }
}
