//! End-to-end auth flow tests: form submit against a stubbed service,
//! token persistence, session promotion and navigation.

mod common;

use std::time::Duration;

use corequarry::auth::error::GENERIC_PROTOCOL_MESSAGE;
use corequarry::auth::flow::REGISTERED_NOTICE;
use corequarry::auth::{
    AccountClient, AuthFlow, Navigator, Route, SessionGate, SessionStatus, TokenStore,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{event_log, events, ReadOnlyStore, RecordingNavigator, RecordingStore};

/// Poll the flow until its pending request resolves.
async fn drive(
    flow: &mut AuthFlow,
    store: &dyn TokenStore,
    gate: &mut SessionGate,
    nav: &mut dyn Navigator,
) {
    for _ in 0..500 {
        flow.poll(store, gate, nav);
        if !flow.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("auth request did not resolve in time");
}

#[tokio::test]
async fn successful_login_persists_token_then_navigates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "abc123" })),
        )
        .mount(&server)
        .await;

    let log = event_log();
    let store = RecordingStore::new(log.clone());
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.email = "a@b.com".to_string();
    flow.fields.password = "secret".to_string();
    flow.submit_login(&client);
    assert!(flow.loading);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert!(!flow.loading);
    assert_eq!(flow.error, None);
    assert_eq!(store.token().as_deref(), Some("abc123"));
    assert_eq!(gate.status(), SessionStatus::Authenticated);
    assert_eq!(nav.replaced, vec![Route::Tabs]);
    // the token write strictly precedes the navigation transition
    assert_eq!(events(&log), vec!["save", "replace:Tabs"]);
    // password is not kept around after a successful login
    assert!(flow.fields.password.is_empty());
}

#[tokio::test]
async fn login_without_token_field_stays_put() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "owner": { "id": 1 } })),
        )
        .mount(&server)
        .await;

    let log = event_log();
    let store = RecordingStore::new(log.clone());
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.email = "a@b.com".to_string();
    flow.fields.password = "secret".to_string();
    flow.submit_login(&client);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert_eq!(flow.error.as_deref(), Some(GENERIC_PROTOCOL_MESSAGE));
    assert_eq!(store.token(), None);
    assert!(nav.replaced.is_empty());
    assert_eq!(gate.status(), SessionStatus::Unknown);
}

#[tokio::test]
async fn rejected_login_surfaces_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let log = event_log();
    let store = RecordingStore::new(log.clone());
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.email = "a@b.com".to_string();
    flow.fields.password = "wrong".to_string();
    flow.submit_login(&client);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert_eq!(flow.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(store.token(), None);
    assert!(nav.replaced.is_empty());
}

#[tokio::test]
async fn double_submit_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "token": "abc123" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let log = event_log();
    let store = RecordingStore::new(log.clone());
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.email = "a@b.com".to_string();
    flow.fields.password = "secret".to_string();
    flow.submit_login(&client);
    // a double press while the first request is in flight is a no-op
    flow.submit_login(&client);
    flow.submit_login(&client);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert_eq!(store.token().as_deref(), Some("abc123"));
    // the mock's expect(1) verifies the request count on drop
}

#[tokio::test]
async fn storage_failure_aborts_the_authenticated_transition() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "abc123" })),
        )
        .mount(&server)
        .await;

    let log = event_log();
    let store = ReadOnlyStore;
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.email = "a@b.com".to_string();
    flow.fields.password = "secret".to_string();
    flow.submit_login(&client);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert!(!flow.loading);
    assert_eq!(flow.error.as_deref(), Some("session file is not writable"));
    assert!(nav.replaced.is_empty());
    assert_eq!(gate.status(), SessionStatus::Unknown);
}

#[tokio::test]
async fn successful_register_returns_to_login_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/owner/account/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let log = event_log();
    let store = RecordingStore::new(log.clone());
    let mut nav = RecordingNavigator::new(log.clone());
    let mut gate = SessionGate::new();
    let client = AccountClient::new(&server.uri());

    let mut flow = AuthFlow::new();
    flow.fields.name = "Alif Arya".to_string();
    flow.fields.email = "alif@example.com".to_string();
    flow.fields.password = "secret".to_string();
    flow.submit_register(&client);

    drive(&mut flow, &store, &mut gate, &mut nav).await;

    assert_eq!(flow.notice.as_deref(), Some(REGISTERED_NOTICE));
    assert_eq!(flow.error, None);
    assert_eq!(store.token(), None);
    assert_eq!(nav.replaced, vec![Route::Login]);
    assert_eq!(gate.status(), SessionStatus::Unknown);
}
