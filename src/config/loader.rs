use std::{fs, io, path::Path};

use serde_json::{Map, Value};
use tracing::debug;

use super::error::ConfigError;
use super::resolver::ConfigResolver;
use super::{Config, defaults};

/// An optional config file, either read and parsed or not there at all.
#[derive(Debug)]
pub(super) enum Loaded {
    Present(Map<String, Value>),
    Absent,
}

impl Config {
    /// Resolver for the standard project layout under `root`.
    pub fn discover(root: &Path) -> ConfigResolver {
        ConfigResolver::new(defaults::example_config_path(root))
            .with_override(defaults::override_config_path(root))
            .with_env_file(defaults::env_file_path(root))
    }
}

pub(super) fn load_required(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    match load_optional(path)? {
        Loaded::Present(doc) => Ok(doc),
        Loaded::Absent => Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }),
    }
}

pub(super) fn load_optional(path: &Path) -> Result<Loaded, ConfigError> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Loaded::Absent),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!(path = %path.display(), "loaded config file");
    parse_document(&contents, path).map(Loaded::Present)
}

// Decoding happens in serde_json so invalid UTF-8 surfaces as a parse error with a position.
fn parse_document(contents: &[u8], path: &Path) -> Result<Map<String, Value>, ConfigError> {
    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_slice(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
