use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::Value;
use spinwheel_rng_server::DeviceEntropy;
use spinwheel_rng_server::EntropySource;
use spinwheel_rng_server::RandomGenerator;
use spinwheel_rng_server::ServerConfig;
use spinwheel_rng_server::serve_listener;
use tokio::net::TcpListener;

async fn spawn_server(config: ServerConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_listener(listener, config));
    addr
}

async fn get_random(addr: SocketAddr) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(format!("http://{addr}/api/random"))
        .await
        .unwrap();
    let status = response.status();
    (status, response.json::<Value>().await.unwrap())
}

struct Sleepy(Duration);

impl EntropySource for Sleepy {
    fn label(&self) -> &str {
        "microphone"
    }

    fn read_sample(&self, buf: &mut [u8]) -> std::io::Result<()> {
        std::thread::sleep(self.0);
        buf.fill(7);
        Ok(())
    }
}

struct Panicky;

impl EntropySource for Panicky {
    fn label(&self) -> &str {
        "microphone"
    }

    fn read_sample(&self, _buf: &mut [u8]) -> std::io::Result<()> {
        panic!("audio driver crashed");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn without_device_serves_fallback_payload() {
    let addr = spawn_server(ServerConfig::new(RandomGenerator::default())).await;

    let (status, body) = get_random(addr).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    let rand = body["rand"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&rand));
    assert!(body["timestamp"].as_str().is_some_and(|ts| ts.contains('T')));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn device_bytes_are_labelled() {
    let mut device = tempfile::NamedTempFile::new().unwrap();
    device.write_all(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
    let config = ServerConfig::with_device(
        Some(device.path().to_path_buf()),
        Some("hwrng".to_string()),
    );
    let addr = spawn_server(config).await;

    let (first_status, first) = get_random(addr).await;
    let (_, second) = get_random(addr).await;

    assert_eq!(first_status, reqwest::StatusCode::OK);
    assert_eq!(first["source"], "hwrng");
    assert_eq!(first["rand"], second["rand"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_device_degrades_to_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig::new(RandomGenerator::new(Some(Arc::new(DeviceEntropy::new(
        dir.path().join("no-such-device"),
    )))));
    let addr = spawn_server(config).await;

    let (status, body) = get_random(addr).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["source"], "fallback");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_generation_is_an_internal_error() {
    let mut config = ServerConfig::new(RandomGenerator::new(Some(Arc::new(Sleepy(
        Duration::from_millis(500),
    )))));
    config.generate_timeout = Duration::from_millis(50);
    let addr = spawn_server(config).await;

    let (status, body) = get_random(addr).await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn crashed_generation_is_an_internal_error() {
    let config = ServerConfig::new(RandomGenerator::new(Some(Arc::new(Panicky))));
    let addr = spawn_server(config).await;

    let (status, body) = get_random(addr).await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
