pub const USERNAME_ENV: &str = "SPACE_ACES_USERNAME";
pub const PASSWORD_ENV: &str = "SPACE_ACES_PASSWORD";
pub const MAX_TICKS_ENV: &str = "SPACE_ACES_MAX_TICKS";
pub const MAX_SECONDS_ENV: &str = "SPACE_ACES_MAX_SECONDS";

pub const CONFIG_DIR: &str = "configs";
pub const EXAMPLE_CONFIG_FILE: &str = "config.example.json";
pub const OVERRIDE_CONFIG_FILE: &str = "config.json";
pub const ENV_FILE: &str = ".env";

pub const DEFAULT_MAX_TICKS: u64 = 300;
pub const DEFAULT_MAX_SECONDS: f64 = 0.0;

pub const CREDENTIALS_KEY: &str = "credentials";
pub const SETTINGS_KEY: &str = "settings";
pub const RUNTIME_KEY: &str = "runtime";

/// Top-level keys that hold secrets and must never come from a file.
pub const RESERVED_CREDENTIAL_KEYS: [&str; 3] = [CREDENTIALS_KEY, "username", "password"];
