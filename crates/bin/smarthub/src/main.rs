//! # smarthub — home-automation hub console
//!
//! Composition root that wires the hub to the terminal.
//!
//! ## Responsibilities
//! - Load configuration (`smarthub.toml`, env vars)
//! - Install the `tracing` subscriber, writing to stderr so the console
//!   protocol on stdout stays clean
//! - Construct the [`Hub`] and run the [`Console`] over locked stdin/stdout
//!
//! ## Dependency rule
//! No domain logic belongs here.

mod config;

use smarthub_app::console::Console;
use smarthub_app::hub::Hub;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut hub = Hub::new();
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock())
        .with_prompts(config.console.prompts);

    if let Err(err) = console.run(&mut hub) {
        tracing::error!(error = %err, "console aborted");
        return Err(err.into());
    }

    Ok(())
}
