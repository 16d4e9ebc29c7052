//! Terminal front-end for the spin wheel and the number display, plus a
//! launcher for the reference random source.

mod pick;
mod serve;
mod spin;
mod style;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use spinwheel_branding::APP_NAME_SHORT;
use spinwheel_core::Config;
use spinwheel_core::ConfigOverrides;
use tracing_subscriber::EnvFilter;

pub use pick::run_pick;
pub use serve::run_serve;
pub use spin::run_spin;

#[derive(Debug, Parser)]
#[command(name = APP_NAME_SHORT, version, about = "Pick a winner with hardware randomness")]
pub struct Cli {
    /// Base URL of the random source. Overrides `SPINWHEEL_API_URL` and the
    /// config file.
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Number display request timeout in milliseconds; `0` waits forever.
    #[arg(long = "timeout-ms", global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one random fraction and show where it came from.
    Pick,

    /// Spin the wheel over a list of items.
    Spin(SpinArgs),

    /// Run the reference `/api/random` backend.
    Serve(ServeArgs),
}

#[derive(Debug, clap::Args)]
pub struct SpinArgs {
    /// Items on the wheel. Read from `--file` or stdin when omitted.
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,

    /// File with one item per line.
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "items")]
    pub file: Option<PathBuf>,

    /// Skip drawing frames. The reveal still waits for the spin duration.
    #[arg(long = "no-animate")]
    pub no_animate: bool,
}

#[derive(Debug, clap::Args)]
pub struct ServeArgs {
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:8000")]
    pub bind: std::net::SocketAddr,

    /// Device or pipe to read raw entropy from. Without it every response
    /// uses the software generator.
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,

    /// Source label reported for device-derived values.
    #[arg(long, value_name = "LABEL", requires = "device")]
    pub label: Option<String>,
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub async fn run_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let overrides = ConfigOverrides {
        api_base_url: cli.api_url,
        request_timeout_ms: cli.timeout_ms,
    };

    match cli.command {
        Command::Pick => {
            let config = Config::load(overrides)?;
            run_pick(&config).await
        }
        Command::Spin(args) => {
            let config = Config::load(overrides)?;
            run_spin(&config, args).await
        }
        Command::Serve(args) => run_serve(args).await,
    }
}
