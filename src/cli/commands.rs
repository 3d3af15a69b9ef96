use anyhow::{Context, Result};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Config, ConfigResolver, ProcessEnv};

use super::args::Cli;
use super::summary;

pub(crate) fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    if !cli.passthrough.is_empty() {
        debug!(args = ?cli.passthrough, "ignoring launcher arguments");
    }

    let resolver = build_resolver(&cli);
    let config = resolver
        .resolve(&ProcessEnv)
        .context("failed to resolve configuration")?;

    info!(
        example = %resolver.example_path().display(),
        user = %config.credentials.username,
        "configuration resolved"
    );

    if cli.json {
        summary::print_json(&config)
    } else {
        summary::print_summary(&config);
        Ok(())
    }
}

fn build_resolver(cli: &Cli) -> ConfigResolver {
    let mut resolver = Config::discover(&cli.root);

    if let Some(path) = &cli.example_config {
        let mut explicit = ConfigResolver::new(path);
        if let Some(override_path) = resolver.override_path() {
            explicit = explicit.with_override(override_path);
        }
        if let Some(env_file) = resolver.env_file_path() {
            explicit = explicit.with_env_file(env_file);
        }
        resolver = explicit;
    }

    if cli.no_override {
        resolver = resolver.without_override();
    } else if let Some(path) = &cli.config {
        resolver = resolver.with_override(path);
    }

    if cli.no_env_file {
        resolver = resolver.without_env_file();
    } else if let Some(path) = &cli.env_file {
        resolver = resolver.with_env_file(path);
    }

    resolver
}

// RUST_LOG always wins; --verbose falls back to DEBUG, otherwise INFO.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    // An embedding program (or an earlier call) may already own the global subscriber.
    if let Err(err) = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
    {
        debug!(%err, "keeping existing tracing subscriber");
    }
}
