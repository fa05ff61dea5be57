//! Per-frame simulation step
//!
//! One tick per rendered frame: queued moves, then obstacles, then collision
//! classification, then the timer display.

use super::collision::{Outcome, classify};
use super::player::Direction;
use super::state::{GamePhase, GameState, Hazard};

/// Input commands gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Moves in arrival order
    pub moves: Vec<Direction>,
}

impl TickInput {
    pub fn single(direction: Direction) -> Self {
        Self {
            moves: vec![direction],
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    for &direction in &input.moves {
        state.apply_move(direction);
    }

    state.time_ticks += 1;
    state.obstacles.tick();

    match classify(&state.grid, &state.player, &state.obstacles) {
        Outcome::Drowned => state.handle_collision(Hazard::Water),
        Outcome::HitByCar => state.handle_collision(Hazard::Car),
        Outcome::ReachedGoal => state.handle_success(now_ms),
        Outcome::Clear => {}
    }

    if state.phase == GamePhase::Running {
        state.elapsed_secs = now_ms.saturating_sub(state.round_start_ms) / 1000;
    }
}
