//! Countryle - CLI
//!
//! Country-guessing word game with a TUI play mode, a plain CLI mode, and a
//! catalog inspection command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countryle::{
    catalog::{Catalog, DEFAULT_SOURCE_URL, fetch},
    commands::{run_catalog, run_simple},
    interactive::{App, run_tui},
};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "countryle",
    about = "Guess the secret country name in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Country data source: URL, or path to a JSON file in the REST Countries shape
    #[arg(short, long, global = true, default_value = DEFAULT_SOURCE_URL)]
    source: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple {
        /// Delay before revealing a win, in milliseconds
        #[arg(long, default_value = "500")]
        win_delay_ms: u64,
    },

    /// Load the catalog and print pool statistics per difficulty
    Catalog,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = load_catalog(&cli.source)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&catalog)),
        Commands::Simple { win_delay_ms } => {
            run_simple(&catalog, Duration::from_millis(win_delay_ms))
        }
        Commands::Catalog => {
            run_catalog(&catalog);
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countryle=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the country catalog from a URL or a local file
///
/// The catalog is loaded exactly once per run. There is no retry: a failure
/// here ends the program, since there is nothing to play without a catalog.
fn load_catalog(source: &str) -> Result<Catalog> {
    if Path::new(source).exists() {
        return fetch::load_from_file(source)
            .with_context(|| format!("loading catalog from file '{source}'"));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching country catalog...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = fetch::fetch(source);
    spinner.finish_and_clear();

    match result {
        Ok(catalog) => {
            println!("Loaded {} countries.", catalog.len());
            Ok(catalog)
        }
        Err(err) => {
            error!(%err, "catalog fetch failed; the game cannot start");
            Err(err).with_context(|| format!("fetching catalog from '{source}'"))
        }
    }
}
