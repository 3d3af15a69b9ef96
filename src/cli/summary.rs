use anyhow::{Context, Result};
use colored::*;

use crate::config::{Config, MaskedConfig};

use super::util::mask_secret;

pub(crate) fn print_summary(config: &Config) {
    println!("{}", "✅ Configuration resolved".bold().green());
    println!("📋 Current configuration:");
    println!("   Username: {}", config.credentials.username);
    println!("   Password: {}", mask_secret(&config.credentials.password));
    println!("   Max ticks: {}", config.runtime.max_ticks);
    match config.runtime.time_limit_secs() {
        Some(secs) => println!("   Time limit: {secs}s"),
        None => println!("   Time limit: {}", "none".dimmed()),
    }

    if config.settings.is_empty() {
        println!("   Settings: {}", "(empty)".dimmed());
    } else {
        println!("   Settings:");
        for (key, value) in &config.settings {
            println!("     {}: {value}", key.cyan());
        }
    }

    if !config.extra.is_empty() {
        let keys: Vec<&str> = config.extra.keys().map(String::as_str).collect();
        println!("   Extra keys: {}", keys.join(", ").yellow());
    }
}

pub(crate) fn print_json(config: &Config) -> Result<()> {
    let payload = MaskedConfig::new(config, mask_secret);
    let json = serde_json::to_string_pretty(&payload)
        .context("Failed to serialize configuration to JSON")?;
    println!("{json}");
    Ok(())
}
