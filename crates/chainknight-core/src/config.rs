//! Dashboard configuration.
//!
//! Loaded from `<data_dir>/config.json` when present. Every field has a
//! default, so a partial file (or no file) is fine.
//!
//! ```json
//! {
//!   "layout": "tabs",
//!   "load_policy": { "ready_signal": { "grace_ms": 400 } },
//!   "load_timeout_ms": 20000
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChainError, ChainResult};

/// File name of the config inside the data directory
pub const CONFIG_FILE: &str = "config.json";

/// How the dashboard lays out the catalog and the embedded tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Catalog cards above an always-visible frame; first tool pre-selected
    Grid,
    /// Catalog grid, then the tool fullscreen with a back button
    #[default]
    Fullscreen,
    /// Tab bar with several open tools
    Tabs,
}

impl LayoutMode {
    /// Whether this layout drives the single-tool view state machine
    pub fn is_single_tool(&self) -> bool {
        !matches!(self, LayoutMode::Tabs)
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(LayoutMode::Grid),
            "fullscreen" => Ok(LayoutMode::Fullscreen),
            "tabs" => Ok(LayoutMode::Tabs),
            other => Err(ChainError::Config(format!("unknown layout '{other}'"))),
        }
    }
}

/// When `Loading(t)` becomes `Active(t)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Fixed timer, independent of the frame
    FixedDelay { delay_ms: u64 },
    /// Frame ready signal, then a short grace delay for the fade-in
    ReadySignal { grace_ms: u64 },
}

impl LoadPolicy {
    pub fn fixed_delay() -> Self {
        LoadPolicy::FixedDelay { delay_ms: 1500 }
    }

    pub fn ready_signal() -> Self {
        LoadPolicy::ReadySignal { grace_ms: 400 }
    }
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self::ready_signal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub layout: LayoutMode,
    pub load_policy: LoadPolicy,
    /// Give up on a frame that never signals ready (ready-signal policy only)
    pub load_timeout_ms: u64,
    pub progress_tick_ms: u64,
    pub progress_max_step: u8,
    pub progress_cap: u8,
    /// Show the access gate before the catalog
    pub gate_required: bool,
    /// Tool opened at startup
    pub auto_open: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            load_policy: LoadPolicy::default(),
            load_timeout_ms: 20_000,
            progress_tick_ms: 180,
            progress_max_step: 12,
            progress_cap: 90,
            gate_required: true,
            auto_open: None,
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file, falling back to defaults if it doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> ChainResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::info!(path = %path.display(), layout = ?config.layout, "Loaded config");
        Ok(config)
    }

    /// Write as pretty JSON, creating the parent directory if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> ChainResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> ChainResult<()> {
        if self.progress_tick_ms == 0 {
            return Err(ChainError::Config("progress_tick_ms must be > 0".into()));
        }
        if self.progress_max_step == 0 {
            return Err(ChainError::Config("progress_max_step must be > 0".into()));
        }
        if !(1..=99).contains(&self.progress_cap) {
            return Err(ChainError::Config("progress_cap must be in 1..=99".into()));
        }
        if let LoadPolicy::ReadySignal { grace_ms } = self.load_policy {
            if self.load_timeout_ms <= grace_ms {
                return Err(ChainError::Config(
                    "load_timeout_ms must exceed the grace delay".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}
