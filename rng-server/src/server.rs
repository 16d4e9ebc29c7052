use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::error;
use tracing::info;

use crate::entropy::DeviceEntropy;
use crate::entropy::EntropySource;
use crate::generator::RandomGenerator;

/// Upper bound on producing one payload.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct ServerConfig {
    pub generator: RandomGenerator,
    pub generate_timeout: Duration,
}

impl ServerConfig {
    pub fn new(generator: RandomGenerator) -> Self {
        Self {
            generator,
            generate_timeout: GENERATE_TIMEOUT,
        }
    }

    /// Uses the device at `path` when given, reporting it under `label`.
    pub fn with_device(path: Option<std::path::PathBuf>, label: Option<String>) -> Self {
        let device = path.map(|path| {
            let device = DeviceEntropy::new(path);
            let device = match label {
                Some(label) => device.with_label(label),
                None => device,
            };
            Arc::new(device) as Arc<dyn EntropySource>
        });
        Self::new(RandomGenerator::new(device))
    }
}

pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/api/random", get(api_random))
        .with_state(Arc::new(config))
}

async fn api_random(State(config): State<Arc<ServerConfig>>) -> Response {
    let generator = config.generator.clone();
    let task = tokio::task::spawn_blocking(move || generator.generate());
    match tokio::time::timeout(config.generate_timeout, task).await {
        Ok(Ok(payload)) => (StatusCode::OK, Json(payload)).into_response(),
        Ok(Err(err)) => internal_error(&format!("generator task failed: {err}")),
        Err(_) => internal_error("generator timed out"),
    }
}

fn internal_error(cause: &str) -> Response {
    error!(cause, "failed to produce random fraction");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

/// Binds `addr` and serves until the process exits.
pub async fn serve(addr: SocketAddr, config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_listener(listener, config).await
}

pub async fn serve_listener(listener: TcpListener, config: ServerConfig) -> Result<(), ServerError> {
    if let Ok(local) = listener.local_addr() {
        info!(addr = %local, "random source listening");
    }
    axum::serve(listener, router(config)).await?;
    Ok(())
}
