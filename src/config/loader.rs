//! Configuration file loading with precedence handling.

use crate::state::View;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/ldash/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the analytics backend.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Rows per table page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// View to open on startup, by slug ("cost-analysis", "suppliers",
    /// "prediction", "heatmap").
    #[serde(default)]
    pub default_view: Option<String>,

    /// Show fault details on boundary recovery screens.
    #[serde(default)]
    pub dev_mode: Option<bool>,

    /// Per-request HTTP timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Directory CSV exports are written into.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Base URL of the analytics backend.
    pub api_base_url: String,
    /// Rows per table page.
    pub page_size: usize,
    /// View to open on startup.
    pub default_view: View,
    /// Show fault details on boundary recovery screens.
    pub dev_mode: bool,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Directory CSV exports are written into.
    pub export_dir: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Disable colored output (CLI flag only).
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            page_size: 10,
            default_view: View::default(),
            dev_mode: false,
            request_timeout: Duration::from_secs(10),
            export_dir: default_export_dir(),
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Resolve the default export directory.
///
/// The platform downloads directory when it exists, else the working
/// directory.
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ldash/ldash.log` on Unix-like systems, or the
/// appropriate platform path elsewhere. Falls back to the current directory
/// if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ldash").join("ldash.log")
    } else {
        PathBuf::from("ldash.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/ldash/config.toml` on Unix, appropriate path on other
/// platforms. `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ldash").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - defaults
/// apply). Returns `Err` only if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (the CLI `--config` flag)
/// 2. `LDASH_CONFIG` environment variable
/// 3. Default path `~/.config/ldash/config.toml`
///
/// Missing config files are NOT errors; defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LDASH_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, `Some(value)` wins; `None` keeps the
/// default. An unrecognized `default_view` slug keeps the default view with
/// a warning rather than failing startup.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let default_view = match config.default_view.as_deref() {
        None => defaults.default_view,
        Some(slug) => View::from_slug(slug).unwrap_or_else(|| {
            warn!(slug, "unknown default_view in config, keeping default");
            defaults.default_view
        }),
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        default_view,
        dev_mode: config.dev_mode.unwrap_or(defaults.dev_mode),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        export_dir: config.export_dir.unwrap_or(defaults.export_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: defaults.no_color,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LDASH_API_URL`: override the backend base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("LDASH_API_URL") {
        config.api_base_url = url;
    }

    config
}

/// CLI argument overrides, highest precedence.
///
/// Only fields the user explicitly set are `Some`/`true`.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Backend base URL from the positional argument.
    pub api_url: Option<String>,
    /// Rows per page from `--page-size`.
    pub page_size: Option<usize>,
    /// Startup view from `--view`.
    pub view: Option<View>,
    /// `--dev` flag.
    pub dev_mode: bool,
    /// Export directory from `--export-dir`.
    pub export_dir: Option<PathBuf>,
    /// `--no-color` flag.
    pub no_color: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults -> Config File -> Env Vars -> CLI Args
/// (highest).
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(view) = cli.view {
        config.default_view = view;
    }
    if cli.dev_mode {
        config.dev_mode = true;
    }
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }
    if cli.no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
