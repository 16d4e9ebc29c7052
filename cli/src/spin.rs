use std::io::IsTerminal;
use std::io::Write;
use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use spinwheel_core::Config;
use spinwheel_core::SpinPlan;
use spinwheel_core::SpinPresenter;
use spinwheel_core::rotation::angle_at;
use spinwheel_core::rotation::segment_at;
use spinwheel_rng_api::RandomClient;
use spinwheel_rng_api::RandomSource;
use spinwheel_rng_api::build_reqwest_client;
use tokio::time::Instant;

use crate::SpinArgs;
use crate::style::Styler;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_spin(config: &Config, args: SpinArgs) -> anyhow::Result<ExitCode> {
    let client = RandomClient::new(build_reqwest_client()?, config.wheel_provider());
    let mut presenter = SpinPresenter::new(client, config.spin.clone());
    if args.items.is_empty() {
        presenter.set_input(read_input(&args)?);
    } else {
        presenter.set_items(&args.items);
    }

    let styler = Styler::for_stdout();
    print_wheel(&presenter, &styler);

    let animate = !args.no_animate && std::io::stdout().is_terminal();
    let outcome = if animate {
        presenter.begin_spin()?;
        let sample = presenter.resolve_sample().await;
        let plan = presenter.apply_sample(sample)?;
        animate_spin(&presenter, &plan, &styler).await?;
        presenter.settle()?
    } else {
        presenter.spin().await?.winner
    };

    println!("RNG Mode: {}", presenter.rng_mode());
    println!("🎉 Winner: {}", styler.bold(&outcome));
    Ok(ExitCode::SUCCESS)
}

/// Without item arguments, items come from `--file`, then stdin.
fn read_input(args: &SpinArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read items from {}", path.display()));
    }
    std::io::read_to_string(std::io::stdin()).context("failed to read items from stdin")
}

fn print_wheel<S: RandomSource>(presenter: &SpinPresenter<S>, styler: &Styler) {
    let items = presenter.items();
    if items.is_empty() {
        return;
    }
    println!("Spinning {} item(s):", items.len());
    for (item, color) in items.iter().zip(presenter.colors()) {
        println!("  {} {item}", styler.segment("  ", color));
    }
}

/// Redraws the item under the pointer until the spin duration has elapsed.
async fn animate_spin<S: RandomSource>(
    presenter: &SpinPresenter<S>,
    plan: &SpinPlan,
    styler: &Styler,
) -> anyhow::Result<()> {
    let items = presenter.items();
    let colors = presenter.colors();
    let Some(count) = NonZeroUsize::new(items.len()) else {
        return Ok(());
    };

    let start = Instant::now();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut stdout = std::io::stdout();
    loop {
        ticker.tick().await;
        let elapsed = start.elapsed();
        let progress = if plan.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / plan.duration.as_secs_f64()).min(1.0)
        };
        let index = segment_at(angle_at(plan.from_angle, plan.target_angle, progress), count);
        write!(
            stdout,
            "\r\x1b[2K▶ {} {}",
            styler.segment("  ", colors[index]),
            items[index]
        )?;
        stdout.flush()?;
        if elapsed >= plan.duration {
            break;
        }
    }
    writeln!(stdout)?;
    Ok(())
}
