use std::process::ExitCode;

use spinwheel_core::Config;
use spinwheel_core::NumberDisplay;
use spinwheel_rng_api::RandomClient;
use spinwheel_rng_api::build_reqwest_client;

use crate::style::Styler;

/// Fetches one fraction and prints it with its source. A failed fetch prints
/// the notification to stderr and exits with status 1.
pub async fn run_pick(config: &Config) -> anyhow::Result<ExitCode> {
    let client = RandomClient::new(build_reqwest_client()?, config.display_provider());
    let mut display = NumberDisplay::new(client);

    if let Err(notification) = display.pick().await {
        eprintln!("{notification}");
        return Ok(ExitCode::FAILURE);
    }

    let styler = Styler::for_stdout();
    if let Some(value) = display.formatted_value() {
        println!("{}", styler.bold(&value));
    }
    println!("Source: {}", display.source_label());
    if let Some(timestamp) = display.sample().and_then(|sample| sample.timestamp.as_deref()) {
        println!("{}", styler.dim(&format!("Generated at {timestamp}")));
    }
    println!(
        "{} {}",
        styler.status_dot(display.status()),
        display.indicator_text()
    );
    Ok(ExitCode::SUCCESS)
}
