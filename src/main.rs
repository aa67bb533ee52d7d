use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use token_batch::cli::Cli;
use token_batch::config::Config;
use token_batch::constants::DEFAULT_LOG_FILTER;
use token_batch::pipeline;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    parse_args();
    run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Only `--help` and `--version` are honoured; anything else is ignored and
/// the batch runs as usual.
fn parse_args() {
    if let Err(e) = Cli::try_parse() {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            kind => warn!("ignoring command-line arguments ({kind:?})"),
        }
    }
}

fn run() -> Result<()> {
    // Variables already set in the environment take precedence over .env
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("ignoring .env: {e}"),
    }

    let config = Config::from_env();
    debug!(?config, "resolved configuration");

    pipeline::process_files(&config)?;
    Ok(())
}
