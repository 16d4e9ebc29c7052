use std::process::ExitCode;

use clap::Parser;
use spinwheel_cli::Cli;
use spinwheel_cli::init_logging;
use spinwheel_cli::run_main;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();
    run_main(cli).await
}
