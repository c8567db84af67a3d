mod common;

use std::time::Duration;

use career_services::{
    ApiError, AuthProvider, Backend, ClientConfigError, CompanyService, RequestSession,
};
use common::{FakeBackend, VALID_TOKEN};
use http::{header, HeaderMap, HeaderValue};
use serde_json::Value;

async fn echoed_authorization(gateway: &career_services::Gateway) -> Value {
    let body: Value = gateway.get(&["echo"], &[]).await.unwrap();
    body["authorization"].clone()
}

#[tokio::test]
async fn attaches_bearer_token_when_session_resolves() {
    let fake = FakeBackend::spawn().await;
    let seen = echoed_authorization(&fake.signed_in()).await;
    assert_eq!(seen, Value::String(format!("Bearer {VALID_TOKEN}")));
}

#[tokio::test]
async fn omits_authorization_without_a_session() {
    let fake = FakeBackend::spawn().await;
    assert_eq!(echoed_authorization(&fake.anonymous()).await, Value::Null);

    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("session_token=null"));
    let gateway = fake.backend().gateway(RequestSession::from_headers(&headers));
    assert_eq!(echoed_authorization(&gateway).await, Value::Null);
}

#[tokio::test]
async fn cookie_session_is_forwarded_as_bearer() {
    let fake = FakeBackend::spawn().await;
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("lang=en; session_token={VALID_TOKEN}")).unwrap(),
    );
    let gateway = fake.backend().gateway(RequestSession::from_headers(&headers));
    assert_eq!(
        echoed_authorization(&gateway).await,
        Value::String(format!("Bearer {VALID_TOKEN}"))
    );
}

#[tokio::test]
async fn unauthorized_is_distinct_and_not_retried() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.anonymous();

    let before = fake.request_count();
    let result = CompanyService::new(&gateway).list_mine().await;
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(fake.request_count(), before + 1);
}

#[tokio::test]
async fn backend_errors_keep_status_and_body() {
    let fake = FakeBackend::spawn().await;
    let result: Result<Value, ApiError> = fake.signed_in().get(&["boom"], &[]).await;
    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 500,
            message: "kaboom".into(),
        })
    );
}

#[tokio::test]
async fn missing_entities_map_to_not_found() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.anonymous();
    let result = CompanyService::new(&gateway).public_page("nobody").await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = Backend::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let gateway = backend.gateway(None::<career_services::AccessToken>);
    let result = CompanyService::new(&gateway).public_page("acme").await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[test]
fn rejects_base_urls_that_cannot_carry_paths() {
    assert!(matches!(
        Backend::new("mailto:someone@example.com", Duration::from_secs(1)),
        Err(ClientConfigError::NotABase { service: "backend", .. })
    ));
    assert!(matches!(
        Backend::new("not a url", Duration::from_secs(1)),
        Err(ClientConfigError::InvalidUrl { service: "backend", .. })
    ));
}

#[test]
fn auth_provider_rejects_unusable_urls() {
    assert!(matches!(
        AuthProvider::new("", "key", Duration::from_secs(1)),
        Err(ClientConfigError::InvalidUrl { service: "auth provider", .. })
    ));
    assert!(matches!(
        AuthProvider::new("mailto:auth@example.com", "key", Duration::from_secs(1)),
        Err(ClientConfigError::NotABase { service: "auth provider", .. })
    ));
    assert!(AuthProvider::new("http://localhost:54321", "key", Duration::from_secs(1)).is_ok());
}
