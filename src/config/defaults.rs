use std::path::{Path, PathBuf};

use super::constants::*;
use super::types::RuntimeSettings;

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
            max_seconds: DEFAULT_MAX_SECONDS,
        }
    }
}

pub fn example_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(EXAMPLE_CONFIG_FILE)
}

pub fn override_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(OVERRIDE_CONFIG_FILE)
}

pub fn env_file_path(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}
