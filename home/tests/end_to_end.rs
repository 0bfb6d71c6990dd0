//! End-to-end tests: Store + reducer + production environment + HTTP
//!
//! The only substitution is the backend itself (wiremock); everything from
//! the trigger to the rendered text is the production wiring.

use kingraph_api::InfoClient;
use kingraph_home::{HomeAction, HomeReducer, HomeState, ProductionHomeEnvironment, render};
use kingraph_runtime::Store;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(
    server: &MockServer,
) -> Store<
    HomeState,
    HomeAction,
    ProductionHomeEnvironment,
    HomeReducer<ProductionHomeEnvironment>,
> {
    let env = ProductionHomeEnvironment::new(InfoClient::new(server.uri()));
    Store::new(HomeState::default(), HomeReducer::new(), env)
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn trigger_fetches_and_renders_the_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "kingraph",
            "version": "1.0.0",
            "env": "dev",
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);

    let outcome = store
        .send_and_wait_for(
            HomeAction::Load,
            |a| {
                matches!(
                    a,
                    HomeAction::LoadSucceeded { .. } | HomeAction::LoadFailed { .. }
                )
            },
            Duration::from_secs(5),
        )
        .await
        .unwrap();
    assert!(matches!(outcome, HomeAction::LoadSucceeded { .. }));

    let rendered = store.state(|s| render(s)).await;
    assert!(rendered.contains("\"name\": \"kingraph\""));
    assert!(rendered.contains("\"env\": \"dev\""));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn server_error_message_is_preferred_for_display() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/info"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database unavailable" })),
        )
        .mount(&server)
        .await;

    let store = store_for(&server);

    store
        .send_and_wait_for(
            HomeAction::Load,
            |a| matches!(a, HomeAction::LoadFailed { .. }),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("database unavailable")
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn plain_error_body_falls_back_to_the_transport_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/info"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable\n"))
        .mount(&server)
        .await;

    let store = store_for(&server);

    store
        .send_and_wait_for(
            HomeAction::Load,
            |a| matches!(a, HomeAction::LoadFailed { .. }),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("server returned status 503")
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn unreachable_backend_leaves_the_ui_usable() {
    // Nothing listens here; the fetch fails at the transport level.
    let env = ProductionHomeEnvironment::new(InfoClient::new("http://127.0.0.1:1"));
    let store = Store::new(HomeState::default(), HomeReducer::new(), env);

    store
        .send_and_wait_for(
            HomeAction::Load,
            |a| matches!(a, HomeAction::LoadFailed { .. }),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(state.error.is_some());
    assert!(!state.loading);

    // The failure was absorbed into state; a new trigger still works.
    let handle = store.send(HomeAction::Load).await;
    assert!(handle.is_ok());
}
