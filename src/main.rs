// src/main.rs
// stdpkgs - Go standard library package index generator

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Load .env from current directory so env-backed flags can come from it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    cli::run_generate(&cli)
}
