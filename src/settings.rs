use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartConfig, Color};
use crate::error::ChartError;
use crate::stats::StatsType;

/// Returns the path to the settings file: `~/.config/stats-graph/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("stats-graph");
    path.push("settings.json");
    path
}

/// Persisted widget settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
///
/// Sizes are in logical points; they are multiplied by the display
/// scale when the chart surface is allocated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    // Sampling
    pub stats_type: StatsType,
    pub update_rate_ms: f32,

    // Range
    pub min_y: f32,
    pub max_y: f32,

    // Layout
    pub width: u32,
    pub height: u32,
    pub column_width: u32,
    /// Float above everything in the top-left corner
    pub floating: bool,

    // Colors
    pub background: Color,
    pub foreground: Color,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            stats_type: StatsType::Fps,
            update_rate_ms: 500.0,

            min_y: 0.0,
            max_y: 120.0,

            width: 100,
            height: 40,
            column_width: 1,
            floating: true,

            background: Color::BLACK,
            foreground: Color::MAGENTA,
        }
    }
}

impl StatsSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ChartError::IoError(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        match self.save_to(&path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => log::warn!("Failed to write settings: {}", e),
        }
    }

    /// Write settings to a specific file, creating parent directories
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Averaging interval of the sampler
    pub fn update_rate(&self) -> Duration {
        Duration::from_micros((self.update_rate_ms.max(1.0) * 1000.0).round() as u64)
    }

    /// Chart options for a display with `scale` physical pixels per point
    pub fn chart_config(&self, scale: f32) -> ChartConfig {
        let scaled = |v: u32| ((v as f32 * scale).round() as u32).max(1);

        ChartConfig {
            width: scaled(self.width),
            height: scaled(self.height),
            min: self.min_y,
            max: self.max_y,
            column_width: scaled(self.column_width),
            background: self.background,
            foreground: self.foreground,
        }
    }
}
