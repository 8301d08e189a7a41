//! xo - play tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod interrupt;
mod orchestrator;
mod players;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use interrupt::Interrupt;
use orchestrator::Orchestrator;
use rand::SeedableRng;
use rand::rngs::StdRng;
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    }
    .merge(&cli);
    info!(?settings, "Settings resolved");

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let interrupt = Interrupt::new();
    interrupt.listen_for_ctrl_c()?;

    let (first, second) = settings.seats();
    let mut orchestrator = Orchestrator::new(first, second, Console::stdio(interrupt.clone()), rng)?
        .with_interrupt(interrupt);
    orchestrator.run(settings.rounds())?;

    Ok(())
}
