pub mod schema;

pub use schema::{MashConfig, SessionConfig, ThemeConfig, TrailConfig};

use mash_core::{MashError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MashConfig::default()` if
/// the file doesn't exist so the tool always starts with sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MashConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MashConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MashError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| MashError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("mash").join("mash.toml")
}
