use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fmt, fs};

use tracing::debug;

use super::builder::ConfigBuilder;
use super::constants::{MAX_SECONDS_ENV, MAX_TICKS_ENV, PASSWORD_ENV, USERNAME_ENV};
use super::error::ConfigError;
use super::types::ConfigSource;

/// Read-only view of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        env_string(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(key).cloned())
    }
}

pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidUnicode {
            key: key.to_string(),
        }),
    }
}

/// Variables from an env file layered beneath a primary source.
///
/// The primary source always wins; the file only fills gaps.
pub struct EnvOverlay<'a, E: EnvSource + ?Sized> {
    primary: &'a E,
    file_vars: HashMap<String, String>,
    env_file: Option<PathBuf>,
}

impl<'a, E: EnvSource + ?Sized> EnvOverlay<'a, E> {
    pub fn new(primary: &'a E) -> Self {
        Self {
            primary,
            file_vars: HashMap::new(),
            env_file: None,
        }
    }

    /// Layer `path` under the primary source. A missing file leaves the overlay unchanged.
    pub fn with_env_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            debug!(path = %path.display(), "env file not present, skipping");
            return Ok(self);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::EnvFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.file_vars.extend(parse_env_file(&contents, path)?);

        debug!(
            path = %path.display(),
            count = self.file_vars.len(),
            "loaded env file"
        );
        self.env_file = Some(path.to_path_buf());
        Ok(self)
    }

    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Value for `key` together with the layer it came from.
    pub fn lookup(&self, key: &str) -> Result<Option<(String, ConfigSource)>, ConfigError> {
        if let Some(value) = self.primary.var(key)? {
            return Ok(Some((value, ConfigSource::ProcessEnv)));
        }
        Ok(self.file_vars.get(key).map(|value| {
            let origin = self
                .env_file
                .clone()
                .map_or(ConfigSource::ProcessEnv, ConfigSource::EnvFile);
            (value.clone(), origin)
        }))
    }

    /// Human-readable list of the places variables are read from.
    pub fn describe(&self) -> String {
        match &self.env_file {
            Some(path) => format!("process environment and {}", path.display()),
            None => "process environment".to_string(),
        }
    }

    pub fn u64_var(&self, key: &str) -> Result<Option<(u64, ConfigSource)>, ConfigError> {
        self.parse_var(key, "a whole number")
    }

    pub fn f64_var(&self, key: &str) -> Result<Option<(f64, ConfigSource)>, ConfigError> {
        self.parse_var(key, "a number")
    }

    fn parse_var<T>(
        &self,
        key: &str,
        expected: &str,
    ) -> Result<Option<(T, ConfigSource)>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some((value, origin)) = self.lookup(key)? else {
            return Ok(None);
        };
        match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some((parsed, origin))),
            Err(err) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                source_name: origin,
                reason: format!("'{value}' is not {expected} ({err})"),
            }),
        }
    }
}

impl<E: EnvSource + ?Sized> EnvSource for EnvOverlay<'_, E> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.lookup(key)?.map(|(value, _)| value))
    }
}

/// Parse `KEY=VALUE` lines. Values are taken literally: no quotes, escapes,
/// inline comments or `$VAR` expansion.
fn parse_env_file(contents: &str, path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let mut vars = HashMap::new();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let malformed = |reason: &str| ConfigError::EnvFile {
            path: path.to_path_buf(),
            line: index + 1,
            reason: reason.to_string(),
        };
        let assignment = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(malformed("expected KEY=VALUE"));
        };
        let key = key.trim();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(malformed("invalid variable name"));
        }
        vars.insert(key.to_string(), value.to_string());
    }
    Ok(vars)
}

/// Apply every environment-sourced value: credentials and runtime limits.
pub fn apply_env_overlay<E: EnvSource + ?Sized>(
    mut builder: ConfigBuilder,
    overlay: &EnvOverlay<'_, E>,
) -> Result<ConfigBuilder, ConfigError> {
    if let Some((username, origin)) = overlay.lookup(USERNAME_ENV)? {
        debug!(var = USERNAME_ENV, %origin, "username sourced from environment");
        builder = builder.with_credentials(|creds| creds.username = username);
    }

    if let Some((password, origin)) = overlay.lookup(PASSWORD_ENV)? {
        debug!(var = PASSWORD_ENV, %origin, "password sourced from environment");
        builder = builder.with_credentials(|creds| creds.password = password);
    }

    if let Some((max_ticks, origin)) = overlay.u64_var(MAX_TICKS_ENV)? {
        builder = builder.with_runtime(|runtime| runtime.max_ticks = max_ticks);
        builder.record_runtime_origin("max_ticks", origin);
    }

    if let Some((max_seconds, origin)) = overlay.f64_var(MAX_SECONDS_ENV)? {
        builder = builder.with_runtime(|runtime| runtime.max_seconds = max_seconds);
        builder.record_runtime_origin("max_seconds", origin);
    }

    Ok(builder)
}
