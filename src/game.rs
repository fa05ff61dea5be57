//! Frame-driven game loop
//!
//! Owns one game's state and wires it to the outside world: commands come in
//! through an [`InputSource`], frames are paced by a [`FrameScheduler`], the
//! [`Renderer`] draws, and a [`GameOverNotifier`] decides what happens after
//! the last life is lost.

use std::io;

use crate::highscores::HighScore;
use crate::platform::{Clock, Command, FrameScheduler, InputSource, Storage};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Grid, TickInput, tick};

/// Final numbers handed to the game-over collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
}

/// What to do once a game has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterGameOver {
    /// Rebuild everything and play again
    Restart,
    /// Leave the loop
    Exit,
    /// Keep the final screen up; a `Restart` or `Quit` command decides later
    Wait,
}

/// Receives the end-of-game notification
pub trait GameOverNotifier {
    fn game_over(&mut self, summary: &GameOverSummary) -> AfterGameOver;
}

/// Result of a single frame
#[derive(Debug, Default)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    /// Set on the frame the game ended
    pub game_over: Option<GameOverSummary>,
    pub quit: bool,
}

/// A running game and its collaborators
pub struct Game<C: Clock> {
    settings: Settings,
    grid: Grid,
    clock: C,
    storage: Box<dyn Storage>,
    high_score: HighScore,
    state: GameState,
    games_started: u32,
}

impl<C: Clock> Game<C> {
    /// Start a game. `board_width` comes from the renderer and overrides the
    /// configured width.
    ///
    /// Settings that fail validation once the width is applied are replaced
    /// by the defaults.
    pub fn new(settings: Settings, board_width: f32, clock: C, storage: Box<dyn Storage>) -> Self {
        let settings = effective_settings(settings, board_width);
        let grid = settings.grid();
        let high_score = HighScore::load(storage.as_ref());
        let state = GameState::new(
            grid,
            next_seed(&settings),
            settings.starting_lives,
            high_score.best(),
            clock.now_ms(),
        );
        log::info!("New game (seed {})", state.seed);

        Self {
            settings,
            grid,
            clock,
            storage,
            high_score,
            state,
            games_started: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Throw the current game away and build a new one from scratch
    pub fn restart(&mut self) {
        self.state = GameState::new(
            self.grid,
            next_seed(&self.settings),
            self.settings.starting_lives,
            self.high_score.best(),
            self.clock.now_ms(),
        );
        self.games_started += 1;
        log::info!("Restarted (game {}, seed {})", self.games_started, self.state.seed);
    }

    /// Run one frame with the commands received since the previous one
    pub fn frame(&mut self, commands: &[Command]) -> FrameReport {
        let mut input = TickInput::default();
        let mut restart = false;
        for command in commands {
            match *command {
                Command::Move(direction) => input.moves.push(direction),
                Command::Restart => restart = true,
                Command::Quit => {
                    return FrameReport {
                        quit: true,
                        ..Default::default()
                    };
                }
            }
        }

        // Restart is only offered on the final screen
        if restart && self.state.is_game_over() {
            self.restart();
        }

        tick(&mut self.state, &input, self.clock.now_ms());

        let events = self.state.drain_events();
        let mut game_over = None;
        for event in &events {
            if let GameEvent::GameOver {
                final_score,
                high_score,
                new_high_score,
            } = *event
            {
                self.high_score.record(final_score, self.storage.as_mut());
                game_over = Some(GameOverSummary {
                    final_score,
                    high_score,
                    new_high_score,
                });
            }
        }

        FrameReport {
            events,
            game_over,
            quit: false,
        }
    }

    /// Poll input, tick, draw and settle a finished game, all for one frame.
    ///
    /// Returns false once the player quits or the notifier asks to exit.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        notifier: &mut dyn GameOverNotifier,
    ) -> io::Result<bool> {
        let commands = input.poll();
        let report = self.frame(&commands);
        if report.quit {
            log::info!("Quit requested");
            return Ok(false);
        }

        for event in &report.events {
            renderer.on_event(event);
        }
        renderer.render(&self.state)?;

        if let Some(summary) = report.game_over {
            match notifier.game_over(&summary) {
                AfterGameOver::Restart => self.restart(),
                AfterGameOver::Exit => return Ok(false),
                AfterGameOver::Wait => {}
            }
        }
        Ok(true)
    }

    /// Drive frames until the scheduler stops, the player quits or the
    /// notifier asks to exit
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        scheduler: &mut dyn FrameScheduler,
        renderer: &mut dyn Renderer,
        notifier: &mut dyn GameOverNotifier,
    ) -> io::Result<()> {
        while scheduler.next_frame() {
            if !self.step(input, renderer, notifier)? {
                break;
            }
        }
        Ok(())
    }
}

fn effective_settings(settings: Settings, board_width: f32) -> Settings {
    let applied = Settings {
        board_width,
        ..settings
    };
    match applied.validate() {
        Ok(()) => applied,
        Err(e) => {
            log::warn!("Unusable settings ({}), using defaults", e);
            Settings::default()
        }
    }
}

fn next_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(rand::random)
}
