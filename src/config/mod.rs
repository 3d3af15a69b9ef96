//! Startup configuration for the Space Aces bot.
//!
//! A single [`Config`] is resolved from three layers, lowest precedence first:
//! - the checked-in example file (`configs/config.example.json`)
//! - an optional user override (`configs/config.json`), merged key by key
//! - the environment, optionally filled from a local `.env` file
//!
//! Credentials only ever come from the environment layer.

mod builder;
mod constants;
mod defaults;
mod environment;
mod error;
mod loader;
mod merge;
mod resolver;
mod types;
mod validation;

pub use constants::{MAX_SECONDS_ENV, MAX_TICKS_ENV, PASSWORD_ENV, USERNAME_ENV};
pub use environment::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ConfigWarning};
pub use resolver::{ConfigResolver, Resolution, resolve};
pub use types::{Config, ConfigSource, Credentials, MaskedConfig, RuntimeSettings};
