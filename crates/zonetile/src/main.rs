#![warn(missing_docs)]

//! Entry point for the `zonetile` binary.

mod cli;
mod error;
mod inspect;
mod replay;

use std::process;

use clap::Parser;
use tile_snap::Settings;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

/// Run the CLI, reporting any error and exiting non-zero.
fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli {
        log,
        settings,
        store,
        command,
    } = Cli::parse();
    let log_spec = log.spec();
    let env_filter = logging::env_filter_from_spec(&log_spec);
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let settings = match settings {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let store = inspect::open_store(store.as_deref().or(settings.layouts_path.as_deref()))?;

    match command {
        Commands::Presets(args) => inspect::presets(&args),
        Commands::Layouts => inspect::layouts(&store),
        Commands::Zones(args) => inspect::zones(&store, &args),
        Commands::Best(args) => inspect::best(&store, &args),
        Commands::Replay(args) => replay::run(store, &settings, &args),
    }
}
