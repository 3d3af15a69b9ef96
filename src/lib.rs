//! space-aces-bot: startup configuration for the Space Aces automation bot.
//!
//! Resolves one validated [`config::Config`] from the checked-in example file,
//! an optional user override and environment-sourced credentials, before any
//! bot logic runs.

pub mod cli;
pub mod config;
