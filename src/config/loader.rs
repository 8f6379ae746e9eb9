//! Configuration file loading with precedence handling.

use super::ScanConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/docreview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory the inbox scanner captures page images from.
    #[serde(default)]
    pub inbox_dir: Option<PathBuf>,

    /// JSON file of documents to preload into the store.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Columns moved per continuous scroll step.
    #[serde(default)]
    pub scroll_step: Option<u16>,

    /// Simulated background upload latency in milliseconds.
    #[serde(default)]
    pub upload_delay_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Fixed scan configuration.
    #[serde(default)]
    pub scan: Option<ScanConfig>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Scan inbox directory.
    pub inbox_dir: PathBuf,
    /// Optional seed file.
    pub seed_file: Option<PathBuf>,
    /// Continuous scroll step in columns (always >= 1).
    pub scroll_step: u16,
    /// Upload latency in milliseconds.
    pub upload_delay_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Scan configuration.
    pub scan: ScanConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            inbox_dir: default_inbox_dir(),
            seed_file: None,
            scroll_step: 8,
            upload_delay_ms: 1500,
            log_file_path: default_log_path(),
            scan: ScanConfig::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/docreview/docreview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("docreview").join("docreview.log")
    } else {
        PathBuf::from("docreview.log")
    }
}

/// Resolve default scan inbox: `<pictures>/docreview-inbox`, else `./inbox`.
pub fn default_inbox_dir() -> PathBuf {
    dirs::picture_dir()
        .map(|dir| dir.join("docreview-inbox"))
        .unwrap_or_else(|| PathBuf::from("inbox"))
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
/// Returns `~/.config/docreview/config.toml` on Unix, appropriate path elsewhere.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docreview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DOCREVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/docreview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var("DOCREVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DOCREVIEW_INBOX`: Override the scan inbox directory
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(inbox) = std::env::var("DOCREVIEW_INBOX") {
        if !inbox.is_empty() {
            config.inbox_dir = PathBuf::from(inbox);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A zero `scroll_step` is raised to 1 so scrolling always moves.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        inbox_dir: config.inbox_dir.unwrap_or(defaults.inbox_dir),
        seed_file: config.seed_file.or(defaults.seed_file),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step).max(1),
        upload_delay_ms: config.upload_delay_ms.unwrap_or(defaults.upload_delay_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        scan: config.scan.unwrap_or(defaults.scan),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for arguments the user actually passed.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    inbox_override: Option<PathBuf>,
    seed_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(inbox) = inbox_override {
        config.inbox_dir = inbox;
    }

    if let Some(seed) = seed_override {
        config.seed_file = Some(seed);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
