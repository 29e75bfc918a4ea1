use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use alexagonal::config;

mod cli;
mod mcp;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    let cfg = config::load_config(args.config.as_deref());

    init_tracing(cfg.as_ref().ok().and_then(|c| c.log_filter.as_deref()));

    let result = cfg
        .map_err(anyhow::Error::from)
        .and_then(|cfg| cli::run(args, &cfg));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; stdout belongs to the MCP transport.
fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(config::DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
