use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use spinwheel_rng_api::ApiError;
use spinwheel_rng_api::Provider;
use spinwheel_rng_api::RandomClient;
use spinwheel_rng_api::RandomSource;
use spinwheel_rng_api::TransportError;
use spinwheel_rng_api::Validation;
use spinwheel_rng_api::build_reqwest_client;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header_exists;
use wiremock::matchers::method;
use wiremock::matchers::path;

fn client_for(server: &MockServer, provider: Provider) -> RandomClient {
    let provider = Provider {
        base_url: server.uri(),
        ..provider
    };
    RandomClient::new(build_reqwest_client().unwrap(), provider)
}

#[tokio::test]
async fn fetches_and_validates_sample() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rand": 0.123456789,
            "source": "microphone",
            "timestamp": "2025-12-11T10:30:00.123456",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Provider::default());
    let sample = client.fetch().await.unwrap();

    assert_eq!(sample.value, 0.123456789);
    assert_eq!(sample.source, "microphone");
    assert_eq!(sample.timestamp.as_deref(), Some("2025-12-11T10:30:00.123456"));
    assert_eq!(client.location(), server.uri());
}

#[tokio::test]
async fn invalid_payload_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "invalid": "data" })))
        .mount(&server)
        .await;

    let err = client_for(&server, Provider::default())
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, Provider::default())
        .fetch()
        .await
        .unwrap_err();

    match err {
        ApiError::Transport(TransportError::Http { status, body }) => {
            assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body.unwrap_or_default().contains("Internal server error"));
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "rand": 0.5, "source": "fallback", "timestamp": "t" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider = Provider::default().with_timeout(Some(Duration::from_millis(100)));
    let err = client_for(&server, provider).fetch().await.unwrap_err();

    assert!(err.is_timeout(), "{err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = RandomClient::new(
        build_reqwest_client().unwrap(),
        Provider::new(format!("http://127.0.0.1:{port}")),
    );

    let err = client.fetch().await.unwrap_err();

    assert!(
        matches!(err, ApiError::Transport(TransportError::Network(_))),
        "{err:?}"
    );
}

#[tokio::test]
async fn lenient_client_accepts_payload_without_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "rand": 0.45, "source": "microphone" })),
        )
        .mount(&server)
        .await;

    let provider = Provider::default().with_validation(Validation::Lenient);
    let sample = client_for(&server, provider).fetch().await.unwrap();

    assert_eq!(sample.value, 0.45);
    assert_eq!(sample.source, "microphone");
    assert_eq!(sample.timestamp, None);
}
