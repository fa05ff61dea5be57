//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, time passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Outcome, classify, overlaps_car, stands_on_log, time_bonus};
pub use grid::{Grid, RowKind};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSet};
pub use player::{Direction, Player};
pub use state::{GameEvent, GamePhase, GameState, Hazard};
pub use tick::{TickInput, tick};
