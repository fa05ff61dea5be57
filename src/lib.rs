//! Frog Crossing - a single-screen road-and-river crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, obstacles, collisions, scoring)
//! - `game`: Frame-driven loop wiring the simulation to its collaborators
//! - `platform`: Input, storage, clock and logging abstractions
//! - `renderer`: Renderer contract and the terminal renderer
//! - `settings` / `highscores`: Configuration and the persisted best score

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{AfterGameOver, Game, GameOverNotifier, GameOverSummary};
pub use highscores::HighScore;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Cells per side of the square board (odd, so the start column is centered)
    pub const GRID_SIZE: u32 = 13;
    /// Default board width in pixels (40px cells at 13 cells)
    pub const BOARD_WIDTH: f32 = 520.0;

    /// Last row index of the water band (rows 1..=5)
    pub const WATER_LAST_ROW: u32 = 5;

    /// Obstacle widths in pixels
    pub const CAR_WIDTH: f32 = 80.0;
    pub const LOG_WIDTH: f32 = 120.0;
    /// Obstacles spawn at x in [0, board_width - SPAWN_MARGIN)
    pub const SPAWN_MARGIN: f32 = 80.0;

    pub const CARS_PER_ROW: usize = 3;
    pub const LOGS_PER_ROW: usize = 2;

    /// Speed magnitude ranges (pixels per tick)
    pub const CAR_SPEED_MIN: f32 = 1.0;
    pub const CAR_SPEED_MAX: f32 = 3.0;
    pub const LOG_SPEED_MIN: f32 = 0.5;
    pub const LOG_SPEED_MAX: f32 = 2.0;

    /// Player hit box edge (pixels) used against cars
    pub const PLAYER_HITBOX: f32 = 40.0;
    /// Horizontal probe offset used to decide whether the player stands on a log
    pub const LOG_FOOTING_OFFSET: f32 = 20.0;
    /// Height of a car's hit box
    pub const CAR_HITBOX_HEIGHT: f32 = 40.0;

    pub const STARTING_LIVES: u32 = 3;
    /// Points for reaching the far bank
    pub const GOAL_POINTS: u64 = 100;
    /// Time bonus = floor(TIME_BONUS_NUMERATOR / elapsed_ms)
    pub const TIME_BONUS_NUMERATOR: u64 = 2000;

    /// Default frame rate for the native frame scheduler
    pub const FRAME_RATE: u32 = 60;
}
