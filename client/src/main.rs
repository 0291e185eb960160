use std::{
    env, io,
    sync::{Arc, RwLock},
};

use anyhow::Context;
use config::Config;
use session::Session;
use ticker::TickerHost;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod preset;
mod render;
mod session;
mod ticker;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(&config_path)
            .with_context(|| format!("Couldn't load config from {config_path}"))?,
        None => Config::default(),
    };

    let session = Session::new(&config).context("Invalid config")?;
    info!(
        rows = config.rows(),
        cols = config.cols(),
        preset = config.preset,
        "session ready"
    );

    let state_arc = Arc::new(RwLock::new(session));
    let ticker = TickerHost::start(state_arc.clone());

    let cli_result = cli::run_cli(state_arc);
    ticker.stop();
    cli_result
}
