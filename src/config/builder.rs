use std::collections::HashMap;

use serde_json::{Map, Value};

use super::constants::{RESERVED_CREDENTIAL_KEYS, RUNTIME_KEY, SETTINGS_KEY};
use super::error::ConfigError;
use super::merge::{lookup, merge_into};
use super::types::{Config, ConfigSource, Credentials, RuntimeSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    document: Map<String, Value>,
    layers: Vec<(ConfigSource, Map<String, Value>)>,
    credentials: Credentials,
    runtime: RuntimeSettings,
    runtime_origins: HashMap<&'static str, ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            document: Map::new(),
            layers: Vec::new(),
            credentials: Credentials::default(),
            runtime: RuntimeSettings::default(),
            runtime_origins: HashMap::new(),
        }
    }

    /// Merge a file layer over everything applied so far.
    pub fn with_layer(mut self, source: ConfigSource, doc: Map<String, Value>) -> Self {
        merge_into(&mut self.document, doc.clone());
        self.layers.push((source, doc));
        self
    }

    pub fn with_credentials<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut Credentials),
    {
        update(&mut self.credentials);
        self
    }

    pub fn with_runtime<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RuntimeSettings),
    {
        update(&mut self.runtime);
        self
    }

    pub fn record_runtime_origin(&mut self, field: &'static str, origin: ConfigSource) {
        self.runtime_origins.insert(field, origin);
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn layers(&self) -> impl Iterator<Item = &(ConfigSource, Map<String, Value>)> {
        self.layers.iter()
    }

    /// The highest-precedence file layer that defines `dotted`.
    pub fn source_of(&self, dotted: &str) -> ConfigSource {
        self.layers
            .iter()
            .rev()
            .find(|(_, doc)| lookup(doc, dotted).is_some())
            .or_else(|| self.layers.first())
            .map(|(source, _)| source.clone())
            .unwrap_or(ConfigSource::ProcessEnv)
    }

    pub fn runtime_source(&self, field: &'static str) -> ConfigSource {
        self.runtime_origins
            .get(field)
            .cloned()
            .unwrap_or_else(|| self.source_of(&format!("{RUNTIME_KEY}.{field}")))
    }

    /// Read `runtime.max_ticks` and `runtime.max_seconds` from the merged files.
    pub fn with_file_runtime(mut self) -> Result<Self, ConfigError> {
        let Some(runtime) = self
            .document
            .get(RUNTIME_KEY)
            .filter(|value| !value.is_null())
            .cloned()
        else {
            return Ok(self);
        };
        let Value::Object(runtime) = runtime else {
            return Err(self.invalid(RUNTIME_KEY, "expected an object".to_string()));
        };

        if let Some(value) = runtime.get("max_ticks").filter(|v| !v.is_null()) {
            let ticks = value.as_u64().ok_or_else(|| {
                self.invalid(
                    "runtime.max_ticks",
                    format!("expected a non-negative integer, got {value}"),
                )
            })?;
            self.runtime.max_ticks = ticks;
        }

        if let Some(value) = runtime.get("max_seconds").filter(|v| !v.is_null()) {
            let seconds = value.as_f64().ok_or_else(|| {
                self.invalid(
                    "runtime.max_seconds",
                    format!("expected a number, got {value}"),
                )
            })?;
            self.runtime.max_seconds = seconds;
        }

        Ok(self)
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let settings = match self.document.get(SETTINGS_KEY) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(settings)) => settings.clone(),
            Some(_) => return Err(self.invalid(SETTINGS_KEY, "expected an object".to_string())),
        };

        let extra = self
            .document
            .iter()
            .filter(|(key, _)| {
                key.as_str() != SETTINGS_KEY
                    && key.as_str() != RUNTIME_KEY
                    && !RESERVED_CREDENTIAL_KEYS
                        .iter()
                        .any(|reserved| *reserved == key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Config {
            credentials: self.credentials,
            settings,
            runtime: self.runtime,
            extra,
        })
    }

    fn invalid(&self, key: &str, reason: String) -> ConfigError {
        ConfigError::InvalidValue {
            key: key.to_string(),
            source_name: self.source_of(key),
            reason,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
