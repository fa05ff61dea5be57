//! Browser canvas renderer
//!
//! Paints the composed tile map with 2D context rectangles. Score and status
//! text go into an optional HUD element beside the canvas.

use std::io;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::{Renderer, TILES_PER_CELL, Tile, compose};
use crate::sim::{GameEvent, GamePhase, GameState};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    hud: Option<Element>,
    status: String,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, hud: Option<Element>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            hud,
            status: String::new(),
        })
    }

    /// Size the backing store to the board in play
    pub fn resize(&self, board_width: f32) {
        let side = board_width.round() as u32;
        self.canvas.set_width(side);
        self.canvas.set_height(side);
    }

    fn paint_board(&self, state: &GameState) {
        let cell = state.grid.cell_size as f64;
        let tile_width = cell / TILES_PER_CELL as f64;
        for (y, row) in compose(state).iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                self.ctx.set_fill_style_str(color(tile));
                self.ctx
                    .fill_rect(x as f64 * tile_width, y as f64 * cell, tile_width, cell);
            }
        }
    }

    fn paint_game_over(&self, state: &GameState) -> io::Result<()> {
        let middle = state.grid.board_width as f64 / 2.0;
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
        self.ctx.fill_rect(0.0, middle - 40.0, middle * 2.0, 80.0);
        self.ctx.set_fill_style_str("#ff5555");
        self.ctx.set_font("bold 28px sans-serif");
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text("GAME OVER", middle, middle - 4.0)
            .map_err(js_error)?;
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_font("16px sans-serif");
        self.ctx
            .fill_text("press r to play again", middle, middle + 24.0)
            .map_err(js_error)
    }

    fn update_hud(&self, state: &GameState) {
        if let Some(hud) = &self.hud {
            let text = format!(
                "Score {}  Lives {}  High {}  Time {}s  Bonus {}  {}",
                state.score,
                state.lives,
                state.high_score,
                state.elapsed_secs,
                state.last_time_bonus,
                self.status
            );
            hud.set_text_content(Some(&text));
        }
    }
}

impl Renderer for CanvasRenderer {
    fn board_width(&self) -> f32 {
        self.canvas.client_width() as f32
    }

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.paint_board(state);
        if state.phase == GamePhase::GameOver {
            self.paint_game_over(state)?;
        }
        self.update_hud(state);
        Ok(())
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

fn color(tile: Tile) -> &'static str {
    match tile {
        Tile::Bank => "#2e7d32",
        Tile::Water => "#1565c0",
        Tile::Road => "#424242",
        Tile::Log => "#8d6e63",
        Tile::Car => "#c62828",
        Tile::Player => "#76ff03",
    }
}

fn js_error(e: JsValue) -> io::Error {
    io::Error::other(format!("{:?}", e))
}
