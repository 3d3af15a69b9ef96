//! Command-line entry for the bot launcher.

mod args;
mod commands;
mod summary;
mod util;

pub use args::Cli;
