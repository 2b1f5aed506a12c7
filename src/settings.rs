//! Runtime settings and preferences
//!
//! Loaded from a JSON file next to the binary. Anything missing from the file
//! takes its default, and a missing or broken file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Settings load/save failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the leaderboard text file lives
    pub leaderboard_path: PathBuf,
    /// Whether the missed-asteroid rule starts switched on
    pub missed_rule_enabled: bool,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Seconds simulated per frame
    pub frame_dt: f32,
    /// Frames to run before shutting down
    pub max_frames: u32,
    /// Restart automatically after this many game-over frames (0 = never)
    pub auto_restart_frames: u32,
    /// Log the window title every this many frames (0 = never)
    pub title_log_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("leaderboard.txt"),
            missed_rule_enabled: true,
            seed: None,

            frame_dt: 1.0 / 60.0,
            max_frames: 60 * 60,
            auto_restart_frames: 120,
            title_log_interval: 300,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
