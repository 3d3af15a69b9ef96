use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::commands;

/// Entry point for the `space-aces-bot` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "space-aces-bot",
    about = "Resolve and check the Space Aces bot configuration",
    version,
    long_about = None
)]
pub struct Cli {
    /// Project root holding `configs/` and `.env`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Example/default config (defaults to <root>/configs/config.example.json)
    #[arg(long = "example-config", value_name = "PATH")]
    pub example_config: Option<PathBuf>,

    /// User override config (defaults to <root>/configs/config.json)
    #[arg(long = "config", value_name = "PATH", conflicts_with = "no_override")]
    pub config: Option<PathBuf>,

    /// Env file with credentials (defaults to <root>/.env)
    #[arg(long = "env-file", value_name = "PATH", conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Ignore the user override config
    #[arg(long = "no-override")]
    pub no_override: bool,

    /// Do not read an env file
    #[arg(long = "no-env-file")]
    pub no_env_file: bool,

    /// Print the resolved configuration as JSON (password masked)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Extra arguments forwarded by the launcher; accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
