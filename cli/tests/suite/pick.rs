use core_test_support::mount_random;
use core_test_support::mount_random_json;
use core_test_support::random_body;
use core_test_support::unused_local_url;
use predicates::str::contains;
use serde_json::json;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

use super::test_env::TestEnv;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn prints_value_source_and_indicator() {
    let server = MockServer::start().await;
    mount_random_json(&server, random_body(0.123456789, "microphone")).await;
    let env = TestEnv::new();

    env.command(&server.uri())
        .arg("pick")
        .assert()
        .success()
        .stdout(contains("0.123456789"))
        .stdout(contains("Source: microphone"))
        .stdout(contains("Microphone"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn backend_fallback_is_flagged() {
    let server = MockServer::start().await;
    mount_random_json(&server, random_body(0.5, "fallback")).await;
    let env = TestEnv::new();

    env.command(&server.uri())
        .arg("pick")
        .assert()
        .success()
        .stdout(contains("0.500000000"))
        .stdout(contains("Source: fallback"))
        .stdout(contains("Fallback"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_is_reported_on_stderr() {
    let server = MockServer::start().await;
    mount_random(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })),
    )
    .await;
    let env = TestEnv::new();

    env.command(&server.uri())
        .arg("pick")
        .assert()
        .failure()
        .stderr(contains(
            "Backend server error. Please ensure the backend is running.",
        ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn invalid_payload_is_reported() {
    let server = MockServer::start().await;
    mount_random_json(&server, json!({ "invalid": "data" })).await;
    let env = TestEnv::new();

    env.command(&server.uri())
        .arg("pick")
        .assert()
        .failure()
        .stderr(contains("Received invalid data from server."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_backend_names_the_url() {
    let url = unused_local_url();
    let env = TestEnv::new();

    env.command(&url)
        .arg("pick")
        .assert()
        .failure()
        .stderr(contains(format!(
            "Cannot connect to backend. Please ensure the server is running at {url}"
        )));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn timeout_flag_bounds_the_request() {
    let server = MockServer::start().await;
    mount_random(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(random_body(0.1, "microphone"))
            .set_delay(std::time::Duration::from_secs(5)),
    )
    .await;
    let env = TestEnv::new();

    env.command(&server.uri())
        .args(["--timeout-ms", "100", "pick"])
        .assert()
        .failure()
        .stderr(contains("Request timed out."));
}

#[test]
fn invalid_config_names_the_file() {
    let env = TestEnv::new();
    env.write_config("full_rotations = \"many\"\n");

    env.command("http://127.0.0.1:1")
        .arg("pick")
        .assert()
        .failure()
        .stderr(contains("config.toml"));
}
