//! Terminal renderer (crossterm)

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal,
};

use super::{Renderer, Tile, compose};
use crate::sim::{GameEvent, GamePhase, GameState};

/// Paints the board with colored glyphs, two columns per cell
pub struct TerminalRenderer<W: Write> {
    out: W,
    board_width: f32,
    /// Status line from the last notable event
    status: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, board_width: f32) -> Self {
        Self {
            out,
            board_width,
            status: String::new(),
        }
    }

    fn paint_board(&mut self, state: &GameState) -> io::Result<()> {
        let mut prev: Option<Tile> = None;
        for (y, row) in compose(state).iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for &tile in row {
                if prev != Some(tile) {
                    let (fg, bg) = colors(tile);
                    queue!(
                        self.out,
                        style::SetForegroundColor(fg),
                        style::SetBackgroundColor(bg)
                    )?;
                    prev = Some(tile);
                }
                queue!(self.out, style::Print(glyph(tile)))?;
            }
            queue!(self.out, style::ResetColor)?;
            prev = None;
        }
        Ok(())
    }

    fn paint_hud(&mut self, state: &GameState) -> io::Result<()> {
        let y = state.grid.grid_size as u16;
        let status = self.status.clone();
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            terminal::Clear(terminal::ClearType::FromCursorDown),
            style::Print(format!(
                "Score {:>6}  Lives {}  High {:>6}  Time {:>3}s  Bonus {}",
                state.score, state.lives, state.high_score, state.elapsed_secs, state.last_time_bonus
            )),
            cursor::MoveTo(0, y + 1),
            style::Print(status),
        )?;

        if state.phase == GamePhase::GameOver {
            queue!(
                self.out,
                cursor::MoveTo(0, y + 2),
                style::SetForegroundColor(Color::Red),
                style::Print(format!("GAME OVER  final score {}", state.score)),
                style::ResetColor,
                cursor::MoveTo(0, y + 3),
                style::Print("r: play again   q: quit"),
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn board_width(&self) -> f32 {
        self.board_width
    }

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.paint_board(state)?;
        self.paint_hud(state)?;
        self.out.flush()
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Moved { .. } => {}
            GameEvent::LifeLost { hazard, lives_left } => {
                self.status = format!("Lost a life to the {:?}! {} left", hazard, lives_left);
            }
            GameEvent::GoalReached { points, time_bonus, .. } => {
                self.status = format!("Made it! +{} (+{} time bonus)", points, time_bonus);
            }
            GameEvent::GameOver { new_high_score, .. } => {
                self.status = if *new_high_score {
                    "New high score!".to_string()
                } else {
                    String::new()
                };
            }
        }
    }
}

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Bank => '"',
        Tile::Water => '~',
        Tile::Road => '.',
        Tile::Log => '=',
        Tile::Car => '#',
        Tile::Player => '@',
    }
}

fn colors(tile: Tile) -> (Color, Color) {
    match tile {
        Tile::Bank => (Color::Green, Color::DarkGreen),
        Tile::Water => (Color::Cyan, Color::DarkBlue),
        Tile::Road => (Color::DarkGrey, Color::Black),
        Tile::Log => (Color::Yellow, Color::DarkYellow),
        Tile::Car => (Color::White, Color::DarkRed),
        Tile::Player => (Color::Black, Color::Green),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOARD_WIDTH;
    use crate::sim::Hazard;

    #[test]
    fn test_render_writes_board_and_hud() {
        let state = GameState::with_seed(3, 10, 0);
        let mut renderer = TerminalRenderer::new(Vec::new(), BOARD_WIDTH);
        renderer.render(&state).unwrap();

        let text = String::from_utf8_lossy(&renderer.out);
        assert!(text.contains('@'));
        assert!(text.contains("Lives 3"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_events_update_status() {
        let mut renderer = TerminalRenderer::new(Vec::new(), BOARD_WIDTH);
        renderer.on_event(&GameEvent::LifeLost {
            hazard: Hazard::Car,
            lives_left: 2,
        });
        assert!(renderer.status.contains("2 left"));
    }
}
