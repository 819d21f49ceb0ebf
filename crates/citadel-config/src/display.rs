use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Tri-state capability switch: honor autodetection, or force on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl CapMode {
    /// Resolve against what autodetection found.
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            CapMode::Auto => detected,
            CapMode::Always => true,
            CapMode::Never => false,
        }
    }
}

/// The `[ui]` table of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UiConfig {
    pub color: CapMode,
    pub unicode: CapMode,
    /// Fixed render width; unset means detect from the terminal.
    pub width: Option<usize>,
    /// Pause before the first draw, in milliseconds.
    pub startup_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: CapMode::Auto,
            unicode: CapMode::Auto,
            width: None,
            startup_delay_ms: 500,
        }
    }
}

/// Display configuration schema loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DisplayConfig {
    pub ui: UiConfig,
}

impl DisplayConfig {
    /// Parse and validate configuration TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse display config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;

        Self::from_toml_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Load configuration for the current invocation.
    ///
    /// An explicitly named file (argument or `CITADEL_CONFIG`) must exist and
    /// parse; an absent per-user default file yields the default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Ok(path) = std::env::var("CITADEL_CONFIG") {
            return Self::from_path(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate semantic constraints the schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.ui.width {
            if width == 0 {
                bail!("ui.width must be positive when set");
            }
        }
        Ok(())
    }
}

/// Per-user config location: `<config_dir>/citadel/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("citadel").join("config.toml"))
}
