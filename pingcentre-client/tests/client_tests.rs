use pingcentre_client::transport::mock::MockTransport;
use pingcentre_client::{
    DefaultPingCentre, Endpoint, Payload, PingCentre, PingCentreClient, PingCentreConfig,
    PingCentreError, STAGING_URL,
};
use pingcentre_schema::{SchemaError, SchemaValidator, Topic};
use pingcentre_types::{BuildChannel, ClientId};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

fn mock_topic() -> Topic {
    Topic::new(
        "ios-mock",
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" }
            },
            "required": ["title"]
        }),
    )
    .unwrap()
}

fn data(value: Value) -> Payload {
    value.as_object().cloned().unwrap()
}

fn client_with(transport: Arc<MockTransport>, config: PingCentreConfig) -> DefaultPingCentre {
    DefaultPingCentre::new(mock_topic(), Endpoint::Staging, ClientId::new(), transport, config)
}

fn client(transport: Arc<MockTransport>) -> DefaultPingCentre {
    client_with(transport, PingCentreConfig::default())
}

// ── Validation ───────────────────────────────────────────────────

#[tokio::test]
async fn missing_title_fails_validation_without_network() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    let handle = client.send_ping_with(&Payload::new(), true);
    assert!(handle.is_immediate());

    let err = handle.await.unwrap_err();
    let errors = err.validation_errors().expect("validation error");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("title"));
    assert_eq!(transport.invocations(), 0);
}

#[tokio::test]
async fn send_ping_validates_by_default() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    let err = client.send_ping(&data(json!({ "title": 5 }))).await.unwrap_err();
    assert!(matches!(err, PingCentreError::Validation(_)));
    assert_eq!(transport.invocations(), 0);
}

#[tokio::test]
async fn skipping_validation_sends_any_shape() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    client
        .send_ping_with(&data(json!({ "unexpected": [1, 2] })), false)
        .await
        .unwrap();
    assert_eq!(transport.invocations(), 1);
}

#[tokio::test]
async fn valid_ping_reaches_transport_with_canonical_payload() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    client.send_ping(&data(json!({ "title": "x" }))).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, STAGING_URL);
    assert_eq!(
        requests[0].payload,
        json!({
            "title": "x",
            "topic": "ios-mock",
            "client_id": client.client_id().to_string()
        })
    );
}

#[tokio::test]
async fn reserved_keys_are_overwritten_before_validation() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    client
        .send_ping(&data(json!({ "title": "x", "topic": "other", "client_id": "me" })))
        .await
        .unwrap();

    let payload = &transport.requests()[0].payload;
    assert_eq!(payload["topic"], json!("ios-mock"));
    assert_eq!(payload["client_id"], json!(client.client_id().to_string()));
}

struct RejectAll;

impl SchemaValidator for RejectAll {
    fn validate(&self, _payload: &Value) -> Vec<SchemaError> {
        vec![SchemaError::new("rejected by policy")]
    }
}

#[tokio::test]
async fn custom_validator_drives_validation() {
    let transport = MockTransport::succeeding();
    let topic = Topic::with_validator("ios-mock", Arc::new(RejectAll)).unwrap();
    let client = DefaultPingCentre::new(
        topic,
        Endpoint::Staging,
        ClientId::new(),
        transport.clone(),
        PingCentreConfig::default(),
    );

    let err = client.send_ping(&data(json!({ "title": "x" }))).await.unwrap_err();
    let errors = err.validation_errors().expect("validation error");
    assert_eq!(errors, &[SchemaError::new("rejected by policy")]);
    assert_eq!(transport.invocations(), 0);

    client.send_ping_with(&data(json!({ "title": "x" })), false).await.unwrap();
    assert_eq!(transport.invocations(), 1);
}

// ── Transport failures ───────────────────────────────────────────

#[tokio::test]
async fn transport_failure_is_swallowed_by_default() {
    let transport = MockTransport::with_status(500);
    let client = client(transport.clone());

    let result = client.send_ping(&data(json!({ "title": "x" }))).await;
    assert!(result.is_ok());
    assert_eq!(transport.invocations(), 1);
}

#[tokio::test]
async fn transport_failure_can_be_surfaced() {
    let transport = MockTransport::with_status(503);
    let config = PingCentreConfig {
        surface_transport_errors: true,
        ..Default::default()
    };
    let client = client_with(transport.clone(), config);

    let err = client.send_ping(&data(json!({ "title": "x" }))).await.unwrap_err();
    assert!(matches!(err, PingCentreError::Status(503)));
    assert!(err.is_transport());
}

// ── Identity and concurrency ─────────────────────────────────────

#[tokio::test]
async fn client_id_is_stable_across_pings() {
    let transport = MockTransport::succeeding();
    let id = ClientId::new();
    let client = DefaultPingCentre::new(
        mock_topic(),
        Endpoint::Production,
        id,
        transport.clone(),
        PingCentreConfig::default(),
    );

    for n in 0..3 {
        client.send_ping(&data(json!({ "title": format!("#{n}") }))).await.unwrap();
    }

    let ids: Vec<_> = transport
        .requests()
        .into_iter()
        .map(|r| r.payload["client_id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(id.to_string()); 3]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_pings_complete_independently() {
    let transport = MockTransport::succeeding();
    let client = Arc::new(client(transport.clone()));

    let handles: Vec<_> = (0..16)
        .map(|n| client.send_ping(&data(json!({ "title": n.to_string() }))))
        .collect();

    for result in futures::future::join_all(handles).await {
        result.unwrap();
    }
    assert_eq!(transport.invocations(), 16);
}

#[tokio::test]
async fn dropped_handle_still_delivers() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    drop(client.send_ping(&data(json!({ "title": "fire and forget" }))));

    for _ in 0..100 {
        if transport.invocations() == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(transport.invocations(), 1);
}

#[test]
fn sending_outside_a_runtime_fails_cleanly() {
    let transport = MockTransport::succeeding();
    let client = client(transport.clone());

    let handle = client.send_ping(&data(json!({ "title": "x" })));
    let err = futures::executor::block_on(handle).unwrap_err();
    assert!(matches!(err, PingCentreError::NoRuntime));
    assert_eq!(transport.invocations(), 0);
}

#[test]
fn validation_failure_resolves_outside_a_runtime() {
    let client = client(MockTransport::succeeding());
    let err = futures::executor::block_on(client.send_ping(&Payload::new())).unwrap_err();
    assert!(matches!(err, PingCentreError::Validation(_)));
}

#[test]
fn completed_handle_polled_again_reports_cancelled() {
    let client = client(MockTransport::succeeding());
    let mut handle = client.send_ping(&Payload::new());

    let first = futures::executor::block_on(&mut handle).unwrap_err();
    assert!(matches!(first, PingCentreError::Validation(_)));
    let second = futures::executor::block_on(&mut handle).unwrap_err();
    assert!(matches!(second, PingCentreError::Cancelled));
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn client_for_topic_picks_endpoint_by_channel() {
    let beta = PingCentre::client_for_topic(mock_topic(), BuildChannel::Beta).unwrap();
    assert_eq!(beta.endpoint_url(), Endpoint::Staging.url());

    let release = PingCentre::client_for_topic(mock_topic(), BuildChannel::Release).unwrap();
    assert_eq!(release.endpoint_url(), Endpoint::Production.url());
}

#[test]
fn client_for_topic_generates_fresh_ids() {
    let a = PingCentre::client_for_topic(mock_topic(), BuildChannel::Nightly).unwrap();
    let b = PingCentre::client_for_topic(mock_topic(), BuildChannel::Nightly).unwrap();
    assert_ne!(a.client_id(), b.client_id());
}

#[test]
fn client_for_topic_with_keeps_identity_and_config() {
    let id = ClientId::new();
    let config = PingCentreConfig {
        timeout_ms: 1_000,
        ..Default::default()
    };
    let client =
        PingCentre::client_for_topic_with(mock_topic(), BuildChannel::Aurora, id, config.clone())
            .unwrap();
    assert_eq!(client.client_id(), id);
    assert_eq!(client.config(), &config);
    assert_eq!(client.topic().name(), "ios-mock");
}

#[test]
fn zero_timeout_is_rejected() {
    let config = PingCentreConfig {
        timeout_ms: 0,
        ..Default::default()
    };
    let err = PingCentre::client_for_topic_with(
        mock_topic(),
        BuildChannel::Developer,
        ClientId::new(),
        config,
    )
    .err()
    .unwrap();
    assert!(matches!(err, PingCentreError::Config(_)));
}
