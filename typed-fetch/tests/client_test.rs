//! End-to-end fetches against a mock server.

use serde::Deserialize;
use serde_json::json;
use typed_fetch::{define_error, FetchClient, FetchError, FetchOptions, JsonSchema, SerdeSchema};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct FieldErrors {
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    field: String,
}

#[derive(Debug, Deserialize)]
struct FormError {
    form: String,
}

async fn mount(mock_server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn validation_payload_formats_are_told_apart() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/field",
        ResponseTemplate::new(422).set_body_json(json!({"errors": [{"field": "email"}]})),
    )
    .await;
    mount(
        &mock_server,
        "/form",
        ResponseTemplate::new(422).set_body_json(json!({"form": "expired"})),
    )
    .await;

    let field_errors = define_error(422, SerdeSchema::<FieldErrors>::new(), Some("FieldErrors"));
    let form_error = define_error(422, SerdeSchema::<FormError>::new(), Some("FormError"));
    let client = FetchClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
    let options = || FetchOptions::new().error(&field_errors).error(&form_error);

    let err = client.fetch("/field", options()).await.unwrap_err();
    assert_eq!(field_errors.extract(&err).unwrap().errors[0].field, "email");

    let err = client.fetch("/form", options()).await.unwrap_err();
    assert_eq!(form_error.extract(&err).unwrap().form, "expired");
}

#[tokio::test]
async fn json_schema_error_kind() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/teapot",
        ResponseTemplate::new(418).set_body_json(json!({"code": "TEAPOT"})),
    )
    .await;

    let schema = JsonSchema::new(&json!({
        "type": "object",
        "required": ["code"],
        "properties": { "code": { "const": "TEAPOT" } }
    }))
    .unwrap();
    let teapot = define_error(418, schema, Some("Teapot"));
    let client = FetchClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();

    let err = client
        .fetch("/teapot", FetchOptions::new().error(&teapot))
        .await
        .unwrap_err();

    assert_eq!(teapot.extract(&err), Some(&json!({"code": "TEAPOT"})));
    assert_eq!(err.as_api().unwrap().kind_name(), "Teapot");
}

#[tokio::test]
async fn html_error_page_is_generic_failure() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/gateway",
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let bad_gateway = define_error(502, SerdeSchema::<FormError>::new(), None);
    let client = FetchClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();

    let err = client
        .fetch("/gateway", FetchOptions::new().error(&bad_gateway))
        .await
        .unwrap_err();

    let FetchError::Failed(failed) = &err else {
        panic!("expected generic failure, got {err:?}");
    };
    assert!(failed.message().contains("502"));
}

#[tokio::test]
async fn unreachable_host_is_generic_failure() {
    // port 9 (discard) on localhost is closed in test environments
    let client = FetchClient::new(Url::parse("http://127.0.0.1:9").unwrap()).unwrap();

    let err = client.fetch("/", FetchOptions::new()).await.unwrap_err();
    assert!(err.is_request_failed());
    assert!(err.to_string().starts_with("Request failed:"));
}
