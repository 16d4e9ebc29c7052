use std::process::ExitCode;

use spinwheel_branding::APP_NAME;
use spinwheel_rng_server::ServerConfig;
use spinwheel_rng_server::serve;
use tracing::info;

use crate::ServeArgs;

/// Runs the backend until it fails or the process receives Ctrl-C.
pub async fn run_serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let ServeArgs {
        bind,
        device,
        label,
    } = args;
    match &device {
        Some(path) => info!(device = %path.display(), "reading entropy from device"),
        None => info!("no entropy device configured, serving software fallback"),
    }
    eprintln!("{APP_NAME} random source on http://{bind}/api/random");

    let config = ServerConfig::with_device(device, label);
    tokio::select! {
        result = serve(bind, config) => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }
    Ok(ExitCode::SUCCESS)
}
