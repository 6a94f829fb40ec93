// SPDX-License-Identifier: MPL-2.0
//! Banner geometry and timing configuration.
//!
//! All the interaction constants live here: the open heights, the drag
//! thresholds that decide between "snap back" and "dismiss", and the
//! animation durations. Values can be loaded from and saved to a
//! `shout.toml` file in the platform configuration directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_shout::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.open_height = 90.0;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "shout.toml";
const APP_NAME: &str = "IcedShout";

/// Host status-bar state at presentation time.
///
/// The banner opens slightly shorter when the host window has no status
/// bar to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBar {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presented height with a visible status bar.
    pub open_height: f32,
    /// Presented height when the status bar is hidden.
    pub compact_open_height: f32,
    /// Downward translation past which drag resistance kicks in.
    pub drag_down_threshold: f32,
    /// Divisor applied to downward translation beyond the threshold.
    pub drag_down_divisor: f32,
    /// Upward translation below which a released drag dismisses (strict).
    pub dismiss_up_threshold: f32,
    /// Show animation duration, in seconds.
    pub show_duration: f32,
    /// Post-drag settle animation duration, in seconds.
    pub settle_duration: f32,
    /// Timer- and tap-driven hide animation duration, in seconds.
    pub hide_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_height: 80.0,
            compact_open_height: 70.0,
            drag_down_threshold: 12.0,
            drag_down_divisor: 25.0,
            dismiss_up_threshold: -5.0,
            show_duration: 0.35,
            settle_duration: 0.2,
            hide_duration: 0.35,
        }
    }
}

impl Config {
    /// Resolves the open height for the given status-bar state.
    #[must_use]
    pub fn open_height_for(&self, status_bar: StatusBar) -> f32 {
        match status_bar {
            StatusBar::Visible => self.open_height,
            StatusBar::Hidden => self.compact_open_height,
        }
    }

    /// Show animation duration as a [`Duration`].
    #[must_use]
    pub fn show_animation(&self) -> Duration {
        Duration::from_secs_f32(self.show_duration.max(0.0))
    }

    /// Post-drag settle duration as a [`Duration`].
    #[must_use]
    pub fn settle_animation(&self) -> Duration {
        Duration::from_secs_f32(self.settle_duration.max(0.0))
    }

    /// Timer/tap hide duration as a [`Duration`].
    #[must_use]
    pub fn hide_animation(&self) -> Duration {
        Duration::from_secs_f32(self.hide_duration.max(0.0))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_matches_original_geometry() {
        let config = Config::default();
        assert_eq!(config.open_height_for(StatusBar::Visible), 80.0);
        assert_eq!(config.open_height_for(StatusBar::Hidden), 70.0);
        assert_eq!(config.drag_down_threshold, 12.0);
        assert_eq!(config.dismiss_up_threshold, -5.0);
    }

    #[test]
    fn save_and_load_round_trip_preserves_thresholds() {
        let config = Config {
            open_height: 96.0,
            dismiss_up_threshold: -8.0,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("shout.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("shout.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("shout.toml");
        fs::write(&config_path, "open_height = 100.0\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.open_height, 100.0);
        assert_eq!(loaded.settle_duration, 0.2);
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        let config = Config {
            show_duration: -1.0,
            ..Config::default()
        };
        assert_eq!(config.show_animation(), Duration::ZERO);
    }
}
