use std::time::Duration;

use core_test_support::mount_random;
use core_test_support::mount_random_json;
use core_test_support::random_client;
use core_test_support::unused_local_url;
use pretty_assertions::assert_eq;
use serde_json::json;
use spinwheel_branding::SOURCE_LOCAL_FALLBACK;
use spinwheel_core::Config;
use spinwheel_core::SpinPhase;
use spinwheel_core::SpinPresenter;
use spinwheel_core::SpinSettings;
use spinwheel_core::fallback::FixedRng;
use spinwheel_rng_api::Provider;
use spinwheel_rng_api::RandomClient;
use spinwheel_rng_api::build_reqwest_client;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

// Real sockets and a paused clock do not mix, so these tests shorten the
// animation instead of pausing time.
const TEST_SPIN: Duration = Duration::from_millis(20);

fn wheel(client: RandomClient, input: &str) -> SpinPresenter<RandomClient> {
    let settings = SpinSettings {
        spin_duration: TEST_SPIN,
        ..SpinSettings::default()
    };
    let mut presenter = SpinPresenter::new(client, settings);
    presenter.set_input(input);
    presenter
}

#[tokio::test]
async fn spin_selects_winner_from_api_fraction() {
    let server = MockServer::start().await;
    mount_random_json(&server, json!({ "rand": 0.45, "source": "microphone" })).await;

    let client = random_client(&server, Config::default().wheel_provider());
    let mut presenter = wheel(client, "Item 1\nItem 2\nItem 3\nItem 4\nItem 5");

    presenter.begin_spin().unwrap();
    let sample = presenter.resolve_sample().await;
    let plan = presenter.apply_sample(sample).unwrap();

    // The animation is still running: no winner yet, trigger disabled.
    assert_eq!(presenter.winner(), None);
    assert!(!presenter.can_spin());
    assert_eq!(plan.duration, TEST_SPIN);
    assert_eq!(plan.winner, "Item 3");

    presenter.settle().unwrap();
    assert_eq!(presenter.winner(), Some("Item 3"));
    assert_eq!(presenter.rng_mode(), "microphone");
    assert!(presenter.can_spin());
}

#[tokio::test]
async fn rejected_request_falls_back_to_local_randomness() {
    let provider = Provider {
        base_url: unused_local_url(),
        ..Config::default().wheel_provider()
    };
    let client = RandomClient::new(build_reqwest_client().unwrap(), provider);
    let mut presenter = wheel(client, "A\nB");

    let started = std::time::Instant::now();
    let outcome = presenter.spin().await.unwrap();

    assert!(started.elapsed() >= TEST_SPIN);
    assert!(["A", "B"].contains(&outcome.winner.as_str()));
    assert_eq!(presenter.rng_mode(), SOURCE_LOCAL_FALLBACK);
    assert!(matches!(presenter.phase(), SpinPhase::Settled { .. }));
}

#[tokio::test]
async fn malformed_payload_falls_back_silently() {
    let server = MockServer::start().await;
    mount_random_json(&server, json!({ "invalid": "data" })).await;

    let client = random_client(&server, Config::default().wheel_provider());
    let mut presenter = wheel(client, "A\nB\nC").with_local_rng(FixedRng(0.0));

    let outcome = presenter.spin().await.unwrap();

    assert_eq!(outcome.winner, "A");
    assert_eq!(outcome.source, SOURCE_LOCAL_FALLBACK);
}

#[tokio::test]
async fn server_error_falls_back_silently() {
    let server = MockServer::start().await;
    mount_random(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })),
    )
    .await;

    let client = random_client(&server, Config::default().wheel_provider());
    let mut presenter = wheel(client, "A\nB").with_local_rng(FixedRng(0.99));

    let outcome = presenter.spin().await.unwrap();

    assert_eq!(outcome.winner, "B");
    assert_eq!(presenter.rng_mode(), SOURCE_LOCAL_FALLBACK);
}

#[tokio::test]
async fn exact_one_lands_on_last_item() {
    let server = MockServer::start().await;
    mount_random_json(&server, json!({ "rand": 1.0, "source": "microphone" })).await;

    let client = random_client(&server, Config::default().wheel_provider());
    let mut presenter = wheel(client, "A\nB\nC\nD");

    let outcome = presenter.spin().await.unwrap();

    assert_eq!(outcome.winner_index, 3);
    assert_eq!(outcome.winner, "D");
}
