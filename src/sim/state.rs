//! Game state and core simulation types
//!
//! One owned struct per game; nothing global, so independent games can run
//! side by side.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::time_bonus;
use super::grid::Grid;
use super::obstacle::ObstacleSet;
use super::player::{Direction, Player};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Out of lives; terminal
    GameOver,
}

/// Why a life was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hazard {
    Water,
    Car,
}

/// Notifications produced by the simulation for renderers and the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player changed cell
    Moved { col: u32, row: u32 },
    /// A life was lost and lives remain
    LifeLost { hazard: Hazard, lives_left: u32 },
    /// Far bank reached
    GoalReached { points: u64, time_bonus: u64, score: u64 },
    /// Last life lost
    GameOver {
        final_score: u64,
        high_score: u64,
        new_high_score: bool,
    },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the obstacle layout was built from
    pub seed: u64,
    pub grid: Grid,
    pub obstacles: ObstacleSet,
    pub player: Player,
    pub score: u64,
    pub lives: u32,
    /// Best score known when the game started, raised at game over
    pub high_score: u64,
    /// Clock reading when the current crossing began
    pub round_start_ms: u64,
    /// Whole seconds since `round_start_ms`, for the timer display
    pub elapsed_secs: u64,
    /// Bonus awarded on the most recent crossing
    pub last_time_bonus: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game
    pub fn new(grid: Grid, seed: u64, lives: u32, high_score: u64, now_ms: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            seed,
            obstacles: ObstacleSet::initialize(&grid, &mut rng),
            player: Player::new(&grid),
            grid,
            score: 0,
            lives,
            high_score,
            round_start_ms: now_ms,
            elapsed_secs: 0,
            last_time_bonus: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
        }
    }

    /// Default board and lives
    pub fn with_seed(seed: u64, high_score: u64, now_ms: u64) -> Self {
        Self::new(Grid::default(), seed, STARTING_LIVES, high_score, now_ms)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Apply one move command. Ignored once the game is over.
    pub fn apply_move(&mut self, direction: Direction) {
        if self.is_game_over() {
            return;
        }
        if self.player.step(direction, &self.grid) {
            self.events.push(GameEvent::Moved {
                col: self.player.col,
                row: self.player.row,
            });
        }
    }

    /// Lose a life; the last one ends the game
    pub fn handle_collision(&mut self, hazard: Hazard) {
        self.lives = self.lives.saturating_sub(1);
        log::debug!("Hit {:?}, {} lives left", hazard, self.lives);

        if self.lives == 0 {
            self.end_game();
        } else {
            self.player.reset(&self.grid);
            self.events.push(GameEvent::LifeLost {
                hazard,
                lives_left: self.lives,
            });
        }
    }

    /// Score a crossing and start the next one
    pub fn handle_success(&mut self, now_ms: u64) {
        let bonus = time_bonus(now_ms.saturating_sub(self.round_start_ms));
        self.score += GOAL_POINTS + bonus;
        self.last_time_bonus = bonus;
        log::debug!("Crossed: +{} +{} bonus, score {}", GOAL_POINTS, bonus, self.score);

        self.player.reset(&self.grid);
        self.round_start_ms = now_ms;
        self.elapsed_secs = 0;
        self.events.push(GameEvent::GoalReached {
            points: GOAL_POINTS,
            time_bonus: bonus,
            score: self.score,
        });
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        let new_high_score = self.score > self.high_score;
        self.high_score = self.high_score.max(self.score);
        log::info!(
            "Game over: score {}, high score {}{}",
            self.score,
            self.high_score,
            if new_high_score { " (new)" } else { "" }
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
            high_score: self.high_score,
            new_high_score,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
