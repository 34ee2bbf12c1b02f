//! Configuration file loading with precedence handling.

use crate::source::http::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHARLIST_CONFIG";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV_VAR: &str = "CHARLIST_API_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Configured API base URL does not parse.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidUrl {
        /// Offending value.
        url: String,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/charlist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Root of the character API (e.g., "https://rickandmortyapi.com/api").
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds. Absent means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Start in favorites-only mode.
    #[serde(default)]
    pub favorites_only: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API root.
    pub api_base_url: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Start in favorites-only mode.
    pub favorites_only: bool,
    /// Initial search term.
    pub search_term: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Disable colors.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            favorites_only: false,
            search_term: String::new(),
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

impl ResolvedConfig {
    /// Check values that cannot be validated by deserialization alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the API base URL does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.api_base_url)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidUrl {
                url: self.api_base_url.clone(),
                reason: e.to_string(),
            })
    }
}

/// CLI values that override everything else. `None` leaves the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`
    pub api_base_url: Option<String>,
    /// `--timeout`
    pub request_timeout_secs: Option<u64>,
    /// `--favorites`
    pub favorites_only: Option<bool>,
    /// `--search`
    pub search_term: Option<String>,
    /// `--no-color`
    pub no_color: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/charlist/charlist.log` on Linux, the platform
/// equivalent elsewhere, or `charlist.log` in the current directory if no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("charlist").join("charlist.log")
    } else {
        PathBuf::from("charlist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/charlist/config.toml` on Linux, appropriate path on
/// other platforms. `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("charlist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHARLIST_CONFIG` environment variable
/// 3. Default path `~/.config/charlist/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .or(defaults.request_timeout),
        favorites_only: config.favorites_only.unwrap_or(defaults.favorites_only),
        search_term: defaults.search_term,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHARLIST_API_URL`: Override API base URL
/// - `NO_COLOR`: any value disables colors
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        config.api_base_url = url;
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.no_color = true;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }

    if let Some(secs) = cli.request_timeout_secs {
        config.request_timeout = Some(Duration::from_secs(secs));
    }

    if let Some(favorites_only) = cli.favorites_only {
        config.favorites_only = favorites_only;
    }

    if let Some(term) = cli.search_term {
        config.search_term = term;
    }

    if let Some(no_color) = cli.no_color {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
