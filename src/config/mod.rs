// SPDX-License-Identifier: MPL-2.0
//! Toast manager configuration, loaded from and saved to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, ToastConfig};
//! use iced_toast::ui::notifications::Placement;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_placement = Placement::TopRight;
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::notifications::{TickInterval, TransitionDuration};
use crate::error::Result;
use crate::ui::notifications::{Placement, Transition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToast";

/// User-tunable settings for a toast [`Manager`](crate::ui::notifications::Manager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Zone used when a toast is requested without a placement.
    pub default_placement: Placement,
    /// Enter transition length in milliseconds.
    pub enter_ms: u64,
    /// Exit transition length in milliseconds. `None` waits for an explicit
    /// exit-complete message from the view layer.
    pub exit_ms: Option<u64>,
    /// How often timers are serviced, in milliseconds.
    pub tick_interval_ms: u64,
    /// Number of diagnostic events retained in memory.
    pub diagnostics_buffer_capacity: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_placement: Placement::default(),
            enter_ms: DEFAULT_ENTER_MS,
            exit_ms: Some(DEFAULT_EXIT_MS),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            diagnostics_buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl ToastConfig {
    /// Returns the clamped timer service interval.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::new(self.tick_interval_ms)
    }

    /// Returns the transition timings described by this configuration.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::new(
            TransitionDuration::new(self.enter_ms),
            self.exit_ms.map(TransitionDuration::new),
        )
    }

    /// Returns the clamped diagnostics buffer capacity.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.diagnostics_buffer_capacity)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a configuration file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
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
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_placement() {
        let config = ToastConfig {
            default_placement: Placement::TopLeft,
            exit_ms: None,
            ..ToastConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn unknown_placement_in_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "default_placement = \"middle\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_placement, Placement::BottomRight);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "default_placement = \"top\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_placement, Placement::Top);
        assert_eq!(loaded.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(loaded.exit_ms, Some(DEFAULT_EXIT_MS));
    }

    #[test]
    fn transition_clamps_out_of_range_values() {
        let config = ToastConfig {
            enter_ms: 10,
            exit_ms: Some(60_000),
            ..ToastConfig::default()
        };
        let transition = config.transition();
        assert_eq!(transition.enter(), Duration::from_millis(10));
        assert_eq!(
            transition.exit(),
            Some(Duration::from_millis(MAX_TRANSITION_MS))
        );
    }

    #[test]
    fn default_placement_matches_constant() {
        assert_eq!(
            ToastConfig::default().default_placement.as_str(),
            DEFAULT_PLACEMENT
        );
    }
}
