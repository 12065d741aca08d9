use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `mash.toml`.
///
/// The interval set and the 40 s retention horizon are build-time constants
/// in `mash-core`; only cadence and presentation knobs live here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MashConfig {
    /// Loop and sampling cadence.
    pub session: SessionConfig,
    /// Press-trail display settings.
    pub trail: TrailConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Loop and sampling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum time between displayed-rate recomputations (milliseconds).
    pub update_rate_ms: u64,
    /// Sleep between loop iterations (milliseconds).
    pub poll_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            update_rate_ms: mash_core::session::DEFAULT_UPDATE_RATE_MS,
            poll_delay_ms: 10,
        }
    }
}

/// Press-trail display settings.  The 1 s lookback window is fixed; only
/// the rendered width is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Trail width in terminal cells.
    pub width: u16,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { width: 40 }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color for the max column and trail (hex, e.g. `"#cba6f7"`).
    pub accent: String,
    /// Dim color for labels and borders.
    pub dim: String,
    /// Color for the no-controller fallback message.
    pub alert: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            dim:    "#6c7086".to_string(), // Catppuccin Mocha — overlay0
            alert:  "#f38ba8".to_string(), // Catppuccin Mocha — red
        }
    }
}
