//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so the chosen difficulty, the AI's color
//! and display preferences survive between runs.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory (resolved with
//! [`directories::ProjectDirs`]), or in the working directory when the platform has none.
//! The CLI can point at any other file with `--settings`.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing or broken file falls back to defaults
//! - [`save_settings`] reports I/O and serialization failures as [`CoreError`]

use chess_engine::{Color, Difficulty, TimeControl};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::{CoreError, CoreResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for a game against the AI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub time_control: TimeControl,
    pub ai_color: Color,
    /// Fixed seed for the random strategy, OS entropy when `None`
    pub rng_seed: Option<u64>,
    /// Print the move log after every move
    pub show_notation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            difficulty: Difficulty::default(),
            time_control: TimeControl::Standard,
            ai_color: Color::Black,
            rng_seed: None,
            show_notation: true,
        }
    }
}

/// Search-related overrides taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOverrides {
    pub level: Option<String>,
    pub depth: Option<u8>,
    pub time_ms: Option<u64>,
    pub blitz: bool,
}

impl Settings {
    /// Apply command-line overrides on top of the stored settings
    ///
    /// `blitz` switches the time control first, then a named level replaces the
    /// difficulty, then `depth` / `time_ms` adjust it. A depth alone means a fixed-depth
    /// search unless the level already deepens; a time budget always means deepening.
    pub fn apply_overrides(&mut self, overrides: &SearchOverrides) -> CoreResult<()> {
        if overrides.blitz {
            self.time_control = TimeControl::Blitz;
            if matches!(self.difficulty, Difficulty::IterativeDeepening { .. }) {
                self.difficulty = Difficulty::from_time_control(TimeControl::Blitz);
            }
        }

        if let Some(level) = &overrides.level {
            self.difficulty = Difficulty::from_level(level, self.time_control).ok_or_else(|| {
                CoreError::UnknownDifficulty {
                    level: level.clone(),
                }
            })?;
        }

        let deepening = match self.difficulty {
            Difficulty::IterativeDeepening {
                max_depth,
                time_budget_ms,
            } => Some((max_depth, time_budget_ms)),
            _ => None,
        };
        self.difficulty = match (overrides.depth, overrides.time_ms, deepening) {
            (None, None, _) => self.difficulty,
            (Some(depth), None, None) => Difficulty::FixedDepth(depth),
            (Some(depth), None, Some((_, time_budget_ms))) => Difficulty::IterativeDeepening {
                max_depth: depth,
                time_budget_ms,
            },
            (depth, Some(time_budget_ms), current) => Difficulty::IterativeDeepening {
                max_depth: depth
                    .or(current.map(|(d, _)| d))
                    .unwrap_or_else(|| self.time_control.max_depth()),
                time_budget_ms,
            },
        };
        Ok(())
    }
}

/// Resolve the default settings file path
///
/// E.g. `~/.config/duelchess/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "duelchess", "duelchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn try_load_settings(path: &Path) -> CoreResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings, using defaults when the file is missing or invalid
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the parent directory when needed
pub fn save_settings(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
