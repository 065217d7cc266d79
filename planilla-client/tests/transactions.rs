// planilla-client/tests/transactions.rs
// Entity operations end to end: session check, envelope, classification

use std::sync::Arc;

use planilla_client::{
    ClientConfig, ErrorKind, PlanillaClient, StaticToken, UploadForm, User,
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::models::{CambioEstadoPlanilla, Empleado, FiltroListado, PlanillaEstado};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> PlanillaClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    PlanillaClient::new(config, Arc::new(StaticToken::new("tok"))).unwrap()
}

fn signed_in(server: &MockServer) -> PlanillaClient {
    let client = client(server);
    client.session().sign_in(User::new(3).with_rol(1).with_empresa(2));
    client
}

fn empleado() -> Empleado {
    serde_json::from_value(json!({
        "nombre_completo_empleado_gestor": "Ana Mora Solís",
        "numero_identificacion_empleado_gestor": "1-2345-6789",
        "correo_empleado_gestor": "ana@empresa.cr",
        "salario_base_empleado_gestor": 650000,
        "id_empresa": 2
    }))
    .unwrap()
}

async fn respond_to_create(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/empleados/crear"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_no_user_means_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.empleados().list(&FiltroListado::default()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotAuthenticated);
    assert_eq!(err.message, "Usuario no autenticado");
    assert!(!err.success);
    assert!(err.data.is_empty());
}

#[tokio::test]
async fn test_list_sends_transaction_and_unwraps_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/listar"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_partial_json(json!({
            "user": {"id": 3, "rol": 1, "id_empresa": 2},
            "empleado": {"id_empresa": 2},
            "acceso": {"type": 3, "permiso": 1, "details": "ver empleados"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "array": [{"id_empleado_gestor": 1, "nombre_completo_empleado_gestor": "Ana"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server);
    let response = client
        .empleados()
        .list(&FiltroListado::empresa(2))
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.array[0]["nombre_completo_empleado_gestor"], "Ana");
}

#[tokio::test]
async fn test_list_typed_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/listar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "array": [{
                "id_empleado_gestor": 9,
                "nombre_completo_empleado_gestor": "Luis Vargas",
                "numero_identificacion_empleado_gestor": "208880888",
                "correo_empleado_gestor": "luis@empresa.cr",
                "salario_base_empleado_gestor": "480000.00",
                "estado_empleado_gestor": false
            }]
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server);
    let rows = client
        .empleados()
        .list_typed(&FiltroListado::default())
        .await
        .unwrap()
        .into_inner();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id_empleado_gestor, Some(9));
    assert_eq!(rows[0].salario_base_empleado_gestor, Decimal::new(480000, 0));
    assert!(!rows[0].estado_empleado_gestor);
}

#[tokio::test]
async fn test_invalid_payload_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let client = signed_in(&server);
    let mut bad = empleado();
    bad.correo_empleado_gestor = "sin-arroba".into();

    let err = client.empleados().create(&bad).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Correo electrónico inválido");
}

#[tokio::test]
async fn test_session_is_checked_before_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let mut bad = empleado();
    bad.correo_empleado_gestor = "sin-arroba".into();

    let err = client(&server).empleados().create(&bad).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotAuthenticated);
    assert_eq!(err.message, "Usuario no autenticado");
}

#[tokio::test]
async fn test_edit_is_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/editar"))
        .and(body_partial_json(json!({
            "empleado": {"numero_identificacion_empleado_gestor": "1-2345-6789"},
            "acceso": {"type": 2, "permiso": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = signed_in(&server).empleados().edit(&empleado()).await.unwrap();
    assert!(response.success);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].method.as_str(), "POST");
}

#[tokio::test]
async fn test_create_returns_mutation_body() {
    let server = MockServer::start().await;
    respond_to_create(&server, 200, json!({"success": true, "respuesta": {"insertId": 14}})).await;

    let client = signed_in(&server);
    let response = client.empleados().create(&empleado()).await.unwrap();
    assert_eq!(response.array["respuesta"]["insertId"], json!(14));
}

#[tokio::test]
async fn test_duplicate_entry_passes_through() {
    let server = MockServer::start().await;
    respond_to_create(
        &server,
        200,
        json!({"status": 500, "error": {"details": "Duplicate entry '1-2345-6789' for key 'cedula'"}}),
    )
    .await;

    let client = signed_in(&server);
    let err = client.empleados().create(&empleado()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateEntry);
    assert_eq!(err.message, "Duplicate entry '1-2345-6789' for key 'cedula'");
}

#[tokio::test]
async fn test_backend_rejections() {
    let cases = [
        (200, json!({"respuesta": {"status": 404}}), ErrorKind::NotFound, "Recurso no encontrado"),
        (403, json!({"respuesta": {"status": 403}}), ErrorKind::PermissionDenied, "Acceso denegado"),
        (
            200,
            json!({"respuesta": {"status": 422, "errorMessage": "Cédula requerida"}}),
            ErrorKind::Validation,
            "Cédula requerida",
        ),
        (200, json!({"respuesta": {"error": "Empresa inactiva"}}), ErrorKind::Backend, "Empresa inactiva"),
        (200, json!({"status": 500}), ErrorKind::ServerError, "Error interno del servidor"),
    ];

    for (status, body, kind, message) in cases {
        let server = MockServer::start().await;
        respond_to_create(&server, status, body).await;

        let err = signed_in(&server).empleados().create(&empleado()).await.unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(err.message, message);
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    respond_to_create(&server, 200, json!("ok")).await;

    let err = signed_in(&server).empleados().create(&empleado()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedResponse);
    assert_eq!(err.message, "Formato de respuesta inválido");
}

#[tokio::test]
async fn test_change_planilla_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/planillas/estado"))
        .and(body_partial_json(json!({
            "planilla": {"id_planilla_gestor": 5, "estado_planilla": "Cerrada"},
            "acceso": {"type": 4, "permiso": 4}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let cambio = CambioEstadoPlanilla {
        id_planilla_gestor: 5,
        estado_planilla: PlanillaEstado::Cerrada,
    };
    let response = signed_in(&server).planillas().change_status(&cambio).await.unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_import_uploads_transaction_and_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/importar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "array": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server);
    let files = UploadForm::new().file("archivo", "empleados.xlsx", vec![0x50, 0x4b, 0x03, 0x04]);
    client
        .empleados()
        .import(&json!({"id_empresa": 2}), files)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="transaccion""#));
    assert!(body.contains(r#""empleado":{"id_empresa":2}"#));
}

#[tokio::test]
async fn test_import_unsupported_entity() {
    let server = MockServer::start().await;
    let client = signed_in(&server);
    let err = client
        .empresas()
        .import(&json!({}), UploadForm::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "No se pueden importar empresas");
}
