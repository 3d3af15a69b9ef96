use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::builder::ConfigBuilder;
use super::constants::{CREDENTIALS_KEY, RESERVED_CREDENTIAL_KEYS};
use super::environment::{EnvOverlay, EnvSource, ProcessEnv, apply_env_overlay};
use super::error::{ConfigError, ConfigWarning};
use super::loader::{Loaded, load_optional, load_required};
use super::merge::{lookup, unknown_keys};
use super::types::{Config, ConfigSource};
use super::validation::{CredentialLookup, validate_credentials, validate_runtime};

/// Credential locations checked in every file layer.
const CREDENTIAL_PATHS: [&str; 4] = [
    "credentials.username",
    "credentials.password",
    "username",
    "password",
];

/// Produces one validated [`Config`] from the example defaults, an optional
/// user override and the environment.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    example_path: PathBuf,
    override_path: Option<PathBuf>,
    env_file_path: Option<PathBuf>,
}

/// A resolved config plus every non-fatal finding along the way.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

impl ConfigResolver {
    pub fn new(example_path: impl Into<PathBuf>) -> Self {
        Self {
            example_path: example_path.into(),
            override_path: None,
            env_file_path: None,
        }
    }

    pub fn with_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn without_override(mut self) -> Self {
        self.override_path = None;
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file_path = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.env_file_path = None;
        self
    }

    pub fn example_path(&self) -> &Path {
        &self.example_path
    }

    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    pub fn env_file_path(&self) -> Option<&Path> {
        self.env_file_path.as_deref()
    }

    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Result<Config, ConfigError> {
        self.resolve_with_warnings(env)
            .map(|resolution| resolution.config)
    }

    pub fn resolve_with_warnings<E: EnvSource + ?Sized>(
        &self,
        env: &E,
    ) -> Result<Resolution, ConfigError> {
        let mut warnings = Vec::new();

        debug!(path = %self.example_path.display(), "loading example defaults");
        let defaults = load_required(&self.example_path)?;
        let mut builder = ConfigBuilder::new().with_layer(
            ConfigSource::ExampleDefaults(self.example_path.clone()),
            defaults,
        );

        if let Some(path) = &self.override_path {
            match load_optional(path)? {
                Loaded::Present(doc) => {
                    let source = ConfigSource::UserOverride(path.clone());
                    for key in unknown_keys(builder.document(), &doc, is_reserved) {
                        warnings.push(ConfigWarning::UnknownKey {
                            source: source.clone(),
                            key,
                        });
                    }
                    debug!(path = %path.display(), "applying user override");
                    builder = builder.with_layer(source, doc);
                }
                Loaded::Absent => {
                    warnings.push(ConfigWarning::OverrideMissing { path: path.clone() });
                }
            }
        }

        let file_credentials = leaked_credentials(&builder);
        let file_values_ignored = !file_credentials.is_empty();
        warnings.extend(file_credentials);

        for warning in &warnings {
            warn!("{warning}");
        }

        builder = builder.with_file_runtime()?;

        let mut overlay = EnvOverlay::new(env);
        if let Some(path) = &self.env_file_path {
            overlay = overlay.with_env_file(path)?;
        }
        debug!(env_file = ?overlay.env_file(), "applying environment overlay");
        builder = apply_env_overlay(builder, &overlay)?;

        let runtime_sources = [
            ("max_ticks", builder.runtime_source("max_ticks")),
            ("max_seconds", builder.runtime_source("max_seconds")),
        ];
        let config = builder.build()?;

        validate_credentials(
            &config,
            &CredentialLookup {
                searched: overlay.describe(),
                file_values_ignored,
            },
        )?;
        validate_runtime(&config, |field| {
            runtime_sources
                .iter()
                .find(|(name, _)| *name == field)
                .map_or(ConfigSource::ProcessEnv, |(_, source)| source.clone())
        })?;

        debug!(
            settings = config.settings.len(),
            extra = config.extra.len(),
            warnings = warnings.len(),
            "configuration resolved"
        );
        Ok(Resolution { config, warnings })
    }
}

/// Resolve against the real process environment.
pub fn resolve(
    example_path: &Path,
    override_path: Option<&Path>,
    env_file_path: Option<&Path>,
) -> Result<Config, ConfigError> {
    let mut resolver = ConfigResolver::new(example_path);
    if let Some(path) = override_path {
        resolver = resolver.with_override(path);
    }
    if let Some(path) = env_file_path {
        resolver = resolver.with_env_file(path);
    }
    resolver.resolve(&ProcessEnv)
}

fn is_reserved(key: &str) -> bool {
    RESERVED_CREDENTIAL_KEYS.iter().any(|reserved| *reserved == key)
}

fn leaked_credentials(builder: &ConfigBuilder) -> Vec<ConfigWarning> {
    let mut found = Vec::new();
    for (source, doc) in builder.layers() {
        for path in CREDENTIAL_PATHS {
            if lookup(doc, path).is_some_and(is_literal_secret) {
                found.push(ConfigWarning::CredentialLeakRisk {
                    source: source.clone(),
                    key: path.to_string(),
                });
            }
        }
        if doc
            .get(CREDENTIALS_KEY)
            .is_some_and(|value| !value.is_object() && is_literal_secret(value))
        {
            found.push(ConfigWarning::CredentialLeakRisk {
                source: source.clone(),
                key: CREDENTIALS_KEY.to_string(),
            });
        }
    }
    found
}

/// Empty strings and `<angle-bracket>` placeholders are what the example file ships with.
fn is_literal_secret(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || (s.starts_with('<') && s.ends_with('>')))
        }
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
