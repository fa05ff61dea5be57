//! Game settings
//!
//! Persisted as JSON through the platform store, separately from the high score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::platform::Storage;
use crate::sim::Grid;

/// Reasons a settings document is rejected
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("grid size must be odd and at least 9, got {0}")]
    GridSize(u32),
    #[error("board width must exceed {min}px, got {got}")]
    BoardWidth { min: f32, got: f32 },
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("frame rate must be at least 1")]
    FrameRate,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells per board side
    pub grid_size: u32,
    /// Board width in pixels; the cell size is derived from it
    pub board_width: f32,
    pub starting_lives: u32,
    /// Frames (ticks) per second for the native loop
    pub frame_rate: u32,
    /// Fixed obstacle seed; a fresh one per game when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            board_width: BOARD_WIDTH,
            starting_lives: STARTING_LIVES,
            frame_rate: FRAME_RATE,
            seed: None,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "frog_crossing_settings";

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size < 9 || self.grid_size % 2 == 0 {
            return Err(SettingsError::GridSize(self.grid_size));
        }
        // Obstacles spawn in [0, width - SPAWN_MARGIN); logs must fit on the board
        let min = LOG_WIDTH.max(SPAWN_MARGIN);
        if self.board_width.is_nan() || self.board_width <= min {
            return Err(SettingsError::BoardWidth {
                min,
                got: self.board_width,
            });
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        if self.frame_rate == 0 {
            return Err(SettingsError::FrameRate);
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size, self.board_width)
    }

    /// Load settings from the store.
    ///
    /// Missing, unreadable, corrupt or invalid settings fall back to defaults.
    pub fn load(storage: &dyn Storage) -> Self {
        let json = match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings ({}), using defaults", e);
                return Self::default();
            }
        };

        let settings: Settings = match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Corrupt settings ({}), using defaults", e);
                return Self::default();
            }
        };

        match settings.validate() {
            Ok(()) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Like [`Settings::load`], but writes the defaults out when nothing is
    /// stored yet so there is a document to edit
    pub fn load_or_create(storage: &mut dyn Storage) -> Self {
        let missing = matches!(storage.get_item(Self::STORAGE_KEY), Ok(None));
        let settings = Self::load(storage);
        if missing {
            settings.save(storage);
        }
        settings
    }

    /// Save settings to the store
    pub fn save(&self, storage: &mut dyn Storage) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {}", e),
            },
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }
}
