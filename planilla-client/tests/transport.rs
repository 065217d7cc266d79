// planilla-client/tests/transport.rs
// Transport client against a mock backend

use std::sync::Arc;

use planilla_client::credentials::ACCESS_TOKEN_COOKIE;
use planilla_client::{
    ApiClient, ClientConfig, CookieStore, NetworkApiClient, NoCredentials, UploadForm,
};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri()).with_timeout(5)
}

#[tokio::test]
async fn test_bearer_token_from_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/listar"))
        .and(header("Authorization", "Bearer abc123"))
        .and(header("Content-Type", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "array": []})))
        .expect(1)
        .mount(&server)
        .await;

    let cookies = CookieStore::new();
    cookies.set(ACCESS_TOKEN_COOKIE, "abc123");
    let client = NetworkApiClient::new(&config(&server), cookies).unwrap();

    let result = client.post("empleados/listar", &json!({"x": 1}), true).await;
    assert_eq!(result.unwrap(), json!({"success": true, "array": []}));
}

#[tokio::test]
async fn test_missing_cookie_sends_without_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/planillas/listar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), CookieStore::new()).unwrap();
    let result = client.post("planillas/listar", &json!({}), true).await;
    assert!(result.is_ok());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_public_call_skips_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let cookies = Arc::new(CookieStore::from_header("access_token=abc123"));
    let client = NetworkApiClient::new(&config(&server), cookies).unwrap();
    client.post("auth/login", &json!({}), false).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_non_object_body_is_422() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), NoCredentials).unwrap();
    let err = client.post("empleados/listar", &json!({}), true).await.unwrap_err();
    assert_eq!(err.status, 422);
    assert!(err.is_validation_error);
    assert_eq!(err.message, "Formato de respuesta inválido");
}

#[tokio::test]
async fn test_non_json_body_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), NoCredentials).unwrap();
    let err = client.post("empleados/listar", &json!({}), true).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert!(!err.is_validation_error);
}

#[tokio::test]
async fn test_non_2xx_reports_500_and_keeps_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/editar"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"respuesta": {"status": 403}})),
        )
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), NoCredentials).unwrap();
    let err = client
        .post("/empleados/editar", &json!({}), true)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert!(!err.is_validation_error);
    assert_eq!(err.details, Some(json!({"respuesta": {"status": 403}})));

    let shape = serde_json::to_value(&err).unwrap();
    assert_eq!(shape["ok"], json!(false));
    assert_eq!(shape["status"], json!(500));
}

#[tokio::test]
async fn test_bad_gateway_reports_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), NoCredentials).unwrap();
    let err = client.post("planillas/listar", &json!({}), true).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert!(!err.is_validation_error);
    assert_eq!(err.details, Some(json!("bad gateway")));
}

#[tokio::test]
async fn test_unreachable_backend_is_500() {
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(5);
    let client = NetworkApiClient::new(&config, NoCredentials).unwrap();

    let err = client.post("empleados/listar", &json!({}), true).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert!(err.message.starts_with("Error de conexión con el servidor"));
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogos/puestos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "array": ["Contador"]})))
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(&config(&server), NoCredentials).unwrap();
    client
        .request(Method::GET, "catalogos/puestos", &json!({"ignorado": true}), true)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_upload_is_multipart_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empleados/importar"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "insertados": 2})))
        .mount(&server)
        .await;

    let cookies = CookieStore::from_header("access_token=tok");
    let client = NetworkApiClient::new(&config(&server), cookies).unwrap();
    let form = UploadForm::new()
        .text("transaccion", r#"{"user":{"id":1}}"#)
        .file("archivo", "empleados.csv", b"nombre,cedula\nAna,101110111\n".to_vec());

    let result = client.upload("empleados/importar", form, true).await.unwrap();
    assert_eq!(result["insertados"], json!(2));

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="transaccion""#));
    assert!(body.contains(r#"filename="empleados.csv""#));
}
