pub mod commands;
pub mod display;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use alexagonal::config;
use alexagonal::config::types::AlexagonalConfig;

#[derive(Parser)]
#[command(
    name = "alexagonal",
    about = "MCP server for hexagonal architecture audits.",
    version
)]
pub struct Cli {
    /// Directory holding the prompt and specification assets
    #[arg(long, global = true, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/alexagonal/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve MCP over stdio (the default)
    Serve,
    /// Print the architectural audit prompt
    Prompt,
    /// List the resources the server registers
    Resources,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Dispatch a CLI command. No subcommand means serve.
pub fn run(cli: Cli, cfg: &AlexagonalConfig) -> anyhow::Result<()> {
    let assets_dir = config::resolve_assets_dir(cli.assets_dir.as_deref(), cfg);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => crate::mcp::serve_stdio(assets_dir),
        Commands::Prompt => commands::prompt::run(assets_dir),
        Commands::Resources => commands::resources::run(assets_dir, cli.format),
    }
}
