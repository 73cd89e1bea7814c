//! Dispatch behaviour over canned responses.
//!
//! These tests drive [`dispatch`] directly with [`RawResponse`] values, so
//! every branch is exercised without a network.

use reqwest::header::{HeaderValue, CONTENT_LENGTH};
use serde::Deserialize;
use serde_json::{json, Value};
use typed_fetch::{
    define_error, dispatch, dispatch_untyped, ErrorDescriptor, FetchError, FnSchema, JsonSchema,
    Outcome, RawResponse, SerdeSchema,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct User {
    id: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct NotFound {
    message: String,
    resource: String,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Counter {
    #[serde(deserialize_with = "number_from_string")]
    count: u64,
}

fn number_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn success_body_matching_schema_is_returned() {
    let response = RawResponse::new(200).with_json(&json!({"id": "1", "name": "Ann"}));

    let user = dispatch(response, &[], &SerdeSchema::<User>::new())
        .await
        .unwrap();

    assert_eq!(
        user,
        Some(User {
            id: "1".to_string(),
            name: "Ann".to_string()
        })
    );
}

#[tokio::test]
async fn no_content_resolves_to_none_whatever_the_schema() {
    let rejects_everything = FnSchema::new(|_: &Value| -> Result<Outcome<()>, _> {
        Ok(Outcome::reject("never valid"))
    });

    let result = dispatch(RawResponse::new(204), &[], &rejects_everything).await;
    assert!(matches!(result, Ok(None)));

    let zero_length = RawResponse::new(200).with_header(CONTENT_LENGTH, HeaderValue::from_static("0"));
    let result = dispatch(zero_length, &[], &rejects_everything).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn coercion_is_visible_in_the_result() {
    let response = RawResponse::new(200).with_json(&json!({"count": "41"}));

    let counter = dispatch(response, &[], &SerdeSchema::<Counter>::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(counter.count, 41);
}

#[tokio::test]
async fn wrong_type_raises_schema_validation_error() {
    let response = RawResponse::new(200).with_json(&json!({"id": 1}));

    let result = dispatch(response, &[], &SerdeSchema::<User>::new()).await;

    let err = result.unwrap_err();
    let validation = err.as_validation().expect("schema validation error");
    assert!(!validation.issues().is_empty());
}

#[tokio::test]
async fn json_schema_rejection_lists_each_violation() {
    let schema = JsonSchema::new(&json!({
        "type": "object",
        "required": ["id", "name"],
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" }
        }
    }))
    .unwrap();
    let response = RawResponse::new(200).with_json(&json!({"id": 1, "name": 2}));

    let err = dispatch(response, &[], &schema).await.unwrap_err();
    assert_eq!(err.as_validation().unwrap().issues().len(), 2);
}

#[tokio::test]
async fn untyped_success_returns_decoded_json() {
    let body = json!({"free": ["form", 1, null]});
    let response = RawResponse::new(201).with_json(&body);

    assert_eq!(dispatch_untyped(response, &[]).await.unwrap(), Some(body));
}

// =============================================================================
// Failure path
// =============================================================================

#[tokio::test]
async fn failure_without_kinds_names_the_status() {
    let result = dispatch_untyped(RawResponse::new(500), &[]).await;

    let err = result.unwrap_err();
    assert!(err.is_request_failed());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn matching_kind_produces_typed_error() {
    let not_found = define_error(404, SerdeSchema::<NotFound>::new(), Some("NotFound"));
    let response =
        RawResponse::new(404).with_json(&json!({"message": "nope", "resource": "user"}));

    let err = dispatch_untyped(response, &[not_found.descriptor().clone()])
        .await
        .unwrap_err();

    let api = err.as_api().expect("typed error");
    assert!(not_found.matches(api));
    assert_eq!(api.status_code(), 404);
    assert_eq!(api.message(), "Not Found");
    assert_eq!(not_found.extract(&err).unwrap().resource, "user");
}

#[tokio::test]
async fn shared_status_uses_first_accepting_kind() {
    #[derive(Debug, Deserialize)]
    struct BarBody {
        #[allow(dead_code)]
        bar: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct FooBody {
        foo: f64,
    }

    let bar = define_error(400, SerdeSchema::<BarBody>::new(), Some("Bar"));
    let foo = define_error(400, SerdeSchema::<FooBody>::new(), Some("Foo"));
    let response = RawResponse::new(400).with_json(&json!({"foo": 1}));

    let kinds: Vec<ErrorDescriptor> = vec![(&bar).into(), (&foo).into()];
    let err = dispatch_untyped(response, &kinds).await.unwrap_err();

    assert!(bar.extract(&err).is_none());
    assert_eq!(foo.extract(&err), Some(&FooBody { foo: 1.0 }));
}

#[tokio::test]
async fn error_data_is_coerced() {
    let kind = define_error(429, SerdeSchema::<Counter>::new(), Some("RateLimited"));
    let response = RawResponse::new(429).with_json(&json!({"count": "3"}));

    let err = dispatch_untyped(response, &[kind.descriptor().clone()])
        .await
        .unwrap_err();

    assert_eq!(kind.extract(&err).unwrap().count, 3);
}

#[tokio::test]
async fn repeated_dispatch_gives_identical_results() {
    let not_found = define_error(404, SerdeSchema::<NotFound>::new(), Some("NotFound"));
    let kinds = [not_found.descriptor().clone()];
    let body = json!({"message": "nope", "resource": "user"});

    let first = dispatch_untyped(RawResponse::new(404).with_json(&body), &kinds)
        .await
        .unwrap_err();
    let second = dispatch_untyped(RawResponse::new(404).with_json(&body), &kinds)
        .await
        .unwrap_err();

    assert_eq!(not_found.extract(&first), not_found.extract(&second));
    assert_eq!(first.to_string(), second.to_string());

    let ok = json!({"id": "1", "name": "Ann"});
    let schema = SerdeSchema::<User>::new();
    let a = dispatch(RawResponse::new(200).with_json(&ok), &kinds, &schema).await.unwrap();
    let b = dispatch(RawResponse::new(200).with_json(&ok), &kinds, &schema).await.unwrap();
    assert_eq!(a, b);
}
