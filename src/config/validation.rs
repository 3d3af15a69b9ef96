use super::constants::{PASSWORD_ENV, USERNAME_ENV};
use super::error::ConfigError;
use super::types::{Config, ConfigSource};

/// Where credentials were looked for, carried into the error message.
pub struct CredentialLookup {
    pub searched: String,
    pub file_values_ignored: bool,
}

pub fn validate_credentials(config: &Config, lookup: &CredentialLookup) -> Result<(), ConfigError> {
    let mut missing = Vec::new();
    if config.credentials.username.trim().is_empty() {
        missing.push(USERNAME_ENV);
    }
    if config.credentials.password.trim().is_empty() {
        missing.push(PASSWORD_ENV);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingCredentials {
            missing,
            searched: lookup.searched.clone(),
            file_values_ignored: lookup.file_values_ignored,
        })
    }
}

pub fn validate_runtime(
    config: &Config,
    source_of: impl Fn(&'static str) -> ConfigSource,
) -> Result<(), ConfigError> {
    let runtime = &config.runtime;
    if runtime.max_ticks == 0 {
        return Err(ConfigError::InvalidValue {
            key: "runtime.max_ticks".to_string(),
            source_name: source_of("max_ticks"),
            reason: "must be at least 1".to_string(),
        });
    }
    if !runtime.max_seconds.is_finite() || runtime.max_seconds < 0.0 {
        return Err(ConfigError::InvalidValue {
            key: "runtime.max_seconds".to_string(),
            source_name: source_of("max_seconds"),
            reason: format!(
                "must be a finite number >= 0 (0 disables the limit), got {}",
                runtime.max_seconds
            ),
        });
    }
    Ok(())
}
