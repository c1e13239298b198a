//! flashdeck CLI: the interactive flashcard trainer.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;
mod transcript;

use session::Session;

#[derive(Parser, Debug)]
#[command(name = "flashdeck", version, about = "Interactive flashcard trainer")]
struct Cli {
    /// Cards file to load before the first prompt
    #[arg(long)]
    import: Option<PathBuf>,

    /// Cards file to write on exit
    #[arg(long)]
    export: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the quiz shuffle
    #[arg(long)]
    seed: Option<u64>,
}

/// Accept the single-dash `-import` / `-export` spellings as well.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-import") => OsString::from("--import"),
            Some("-export") => OsString::from("--export"),
            _ => arg,
        })
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;

    let import = cli.import.or(config.import);
    let export = cli.export.or(config.export);
    let rng = match cli.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), rng).with_export_on_exit(export);

    if let Some(path) = import {
        session.import_on_start(&path)?;
    }
    session.run()?;

    tracing::debug!(cards = session.registry().len(), "session finished");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashdeck=warn")),
        )
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
