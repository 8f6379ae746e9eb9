//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use serde::Deserialize;

/// Fixed configuration handed to the scan service on every capture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Simulated capture latency in milliseconds.
    pub capture_delay_ms: u64,
    /// File extensions (lowercase, without dot) the scanner accepts as page images.
    pub accepted_extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            capture_delay_ms: 400,
            accepted_extensions: ["jpg", "jpeg", "png", "tif", "tiff"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ScanConfig {
    /// Whether `extension` (any case, no dot) is an accepted page image format.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }
}
