use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::types::ConfigSource;

/// Fatal resolution failures. Any of these stops the process before the bot starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed reading config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed parsing JSON config at {} (line {}, column {}): {source}",
        .path.display(),
        .source.line(),
        .source.column()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {} must contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed reading env file {}: {source}", .path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed env file {} (line {line}): {reason}", .path.display())]
    EnvFile {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{key} contains invalid UTF-8")]
    InvalidUnicode { key: String },

    #[error("invalid value for '{key}' in {source_name}: {reason}")]
    InvalidValue {
        key: String,
        source_name: ConfigSource,
        reason: String,
    },

    #[error("{}", missing_credentials_message(.missing, .searched, .file_values_ignored))]
    MissingCredentials {
        missing: Vec<&'static str>,
        searched: String,
        file_values_ignored: bool,
    },
}

fn missing_credentials_message(
    missing: &[&'static str],
    searched: &str,
    file_values_ignored: &bool,
) -> String {
    let mut message = format!(
        "missing credentials: {} not set (looked in {searched})",
        missing.join(", ")
    );
    if *file_values_ignored {
        message.push_str(
            "; credentials found in config files are never used, set them in the environment",
        );
    }
    message
}

/// Non-fatal findings collected during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    OverrideMissing { path: PathBuf },
    UnknownKey { source: ConfigSource, key: String },
    CredentialLeakRisk { source: ConfigSource, key: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::OverrideMissing { path } => write!(
                f,
                "override config {} not found, using example defaults only (copy the example to customize)",
                path.display()
            ),
            ConfigWarning::UnknownKey { source, key } => {
                write!(f, "unknown key '{key}' in {source} (passed through)")
            }
            ConfigWarning::CredentialLeakRisk { source, key } => write!(
                f,
                "{source} contains a literal credential at '{key}'; it is ignored, keep secrets in the environment"
            ),
        }
    }
}
