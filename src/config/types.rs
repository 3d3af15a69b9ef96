use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Map<String, Value>,
    pub runtime: RuntimeSettings,
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuntimeSettings {
    pub max_ticks: u64,
    pub max_seconds: f64,
}

impl RuntimeSettings {
    /// `None` means the main loop has no wall-clock limit.
    pub fn time_limit_secs(&self) -> Option<f64> {
        (self.max_seconds > 0.0).then_some(self.max_seconds)
    }
}

/// Where a configuration value came from, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    ExampleDefaults(PathBuf),
    UserOverride(PathBuf),
    EnvFile(PathBuf),
    ProcessEnv,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::ExampleDefaults(path) => {
                write!(f, "example config {}", path.display())
            }
            ConfigSource::UserOverride(path) => write!(f, "override config {}", path.display()),
            ConfigSource::EnvFile(path) => write!(f, "env file {}", path.display()),
            ConfigSource::ProcessEnv => write!(f, "process environment"),
        }
    }
}

// Serialization helper: never carries the password.
#[derive(Serialize)]
pub struct MaskedConfig<'a> {
    pub credentials: MaskedCredentials<'a>,
    pub settings: &'a Map<String, Value>,
    pub runtime: RuntimeSettings,
    pub extra: &'a Map<String, Value>,
}

#[derive(Serialize)]
pub struct MaskedCredentials<'a> {
    pub username: &'a str,
    pub password: String,
}

impl<'a> MaskedConfig<'a> {
    pub fn new(config: &'a Config, mask: impl Fn(&str) -> String) -> Self {
        MaskedConfig {
            credentials: MaskedCredentials {
                username: &config.credentials.username,
                password: mask(&config.credentials.password),
            },
            settings: &config.settings,
            runtime: config.runtime,
            extra: &config.extra,
        }
    }
}
