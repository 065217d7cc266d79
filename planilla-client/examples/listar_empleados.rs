//! List a company's employees
//!
//! ```sh
//! PLANILLA_COOKIE="access_token=..." cargo run -p planilla-client --example listar_empleados -- 7 2
//! ```
//!
//! Arguments: user id, company id.

use std::sync::Arc;

use planilla_client::{ClientConfig, CookieStore, PlanillaClient, User, logger};
use shared::models::FiltroListado;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    logger::init_from_config(&config)?;

    let mut args = std::env::args().skip(1);
    let user_id: i64 = args.next().as_deref().unwrap_or("1").parse()?;
    let empresa: i64 = args.next().as_deref().unwrap_or("1").parse()?;

    let cookies = CookieStore::from_header(&std::env::var("PLANILLA_COOKIE").unwrap_or_default());
    let client = PlanillaClient::new(config, Arc::new(cookies))?;
    client
        .session()
        .sign_in(User::new(user_id).with_empresa(empresa));

    match client.empleados().list_typed(&FiltroListado::empresa(empresa)).await {
        Ok(response) => {
            for empleado in response.into_inner() {
                println!(
                    "{:>6}  {:<40}  {}",
                    empleado.id_empleado_gestor.unwrap_or_default(),
                    empleado.nombre_completo_empleado_gestor,
                    empleado.salario_base_empleado_gestor
                );
            }
        }
        Err(err) => {
            tracing::error!(kind = %err.kind, reason = %err.message, "Listing failed");
            std::process::exit(1);
        }
    }
    Ok(())
}
