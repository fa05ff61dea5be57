//! Rendering
//!
//! The simulation never reads anything back from the renderer except the
//! board width at startup. [`compose`] flattens a state into a tile map that
//! any text or pixel backend can paint.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

use std::io;

use crate::sim::{GameEvent, GameState, ObstacleKind, RowKind};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalRenderer;

/// Draws game state
pub trait Renderer {
    /// Board width in pixels, read once when a game is built
    fn board_width(&self) -> f32;

    /// Draw the whole frame
    fn render(&mut self, state: &GameState) -> io::Result<()>;

    /// Per-event feedback (flashes, sounds). Optional.
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Columns drawn per grid cell
pub const TILES_PER_CELL: usize = 2;

/// What occupies one tile of the composed board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Bank,
    Water,
    Road,
    Log,
    Car,
    Player,
}

impl From<RowKind> for Tile {
    fn from(kind: RowKind) -> Self {
        match kind {
            RowKind::Safe => Tile::Bank,
            RowKind::Water => Tile::Water,
            RowKind::Road => Tile::Road,
        }
    }
}

/// Rasterize a state into rows of tiles, `TILES_PER_CELL` per cell.
/// Obstacles are clipped to the board; the player is drawn last.
pub fn compose(state: &GameState) -> Vec<Vec<Tile>> {
    let grid = &state.grid;
    let rows = grid.grid_size as usize;
    let cols = rows * TILES_PER_CELL;
    let tile_width = grid.cell_size / TILES_PER_CELL as f32;

    let mut tiles: Vec<Vec<Tile>> = (0..rows)
        .map(|row| vec![Tile::from(grid.row_kind(row as u32)); cols])
        .collect();

    for obstacle in &state.obstacles.obstacles {
        let row = obstacle.row() as usize;
        if row >= rows {
            continue;
        }
        let tile = match obstacle.kind() {
            ObstacleKind::Car => Tile::Car,
            ObstacleKind::Log => Tile::Log,
        };
        let start = (obstacle.pos.x / tile_width).floor();
        let end = ((obstacle.pos.x + obstacle.width()) / tile_width).ceil();
        let start = start.max(0.0) as usize;
        let end = (end.max(0.0) as usize).min(cols);
        for t in &mut tiles[row][start.min(end)..end] {
            *t = tile;
        }
    }

    let (col, row) = (state.player.col as usize, state.player.row as usize);
    let first = col * TILES_PER_CELL;
    for t in &mut tiles[row][first..first + TILES_PER_CELL] {
        *t = Tile::Player;
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOARD_WIDTH;
    use crate::sim::{Grid, Obstacle, ObstacleSet};

    fn bare_state() -> GameState {
        let mut state = GameState::with_seed(1, 0, 0);
        state.obstacles = ObstacleSet::from_obstacles(Vec::new(), BOARD_WIDTH);
        state
    }

    #[test]
    fn test_compose_bands_and_player() {
        let tiles = compose(&bare_state());
        assert_eq!(tiles.len(), 13);
        assert!(tiles.iter().all(|row| row.len() == 26));
        assert!(tiles[0].iter().all(|t| *t == Tile::Bank));
        assert!(tiles[3].iter().all(|t| *t == Tile::Water));
        assert!(tiles[8].iter().all(|t| *t == Tile::Road));
        assert_eq!(&tiles[12][12..14], &[Tile::Player, Tile::Player]);
        assert_eq!(tiles[12][11], Tile::Bank);
    }

    #[test]
    fn test_compose_clips_obstacles() {
        let mut state = bare_state();
        let grid = state.grid;
        state.obstacles = ObstacleSet::from_obstacles(
            vec![
                // Half off the left edge: covers pixels [0, 40) → tiles 0..2
                Obstacle::new(&grid, ObstacleKind::Car, 7, -40.0, -1.0),
                // Off the right edge entirely
                Obstacle::new(&grid, ObstacleKind::Log, 2, 530.0, 1.0),
                Obstacle::new(&grid, ObstacleKind::Log, 3, 100.0, 1.0),
            ],
            BOARD_WIDTH,
        );
        let tiles = compose(&state);

        assert_eq!(&tiles[7][0..2], &[Tile::Car, Tile::Car]);
        assert_eq!(tiles[7][2], Tile::Road);
        assert!(tiles[2].iter().all(|t| *t == Tile::Water));
        // [100, 220) → tiles 5..11
        assert_eq!(tiles[3][4], Tile::Water);
        assert!(tiles[3][5..11].iter().all(|t| *t == Tile::Log));
        assert_eq!(tiles[3][11], Tile::Water);
    }

    #[test]
    fn test_compose_uses_obstacle_lane() {
        let mut state = GameState::new(Grid::new(13, 402.0), 1, 3, 0, 0);
        let grid = state.grid;
        state.obstacles = ObstacleSet::from_obstacles(
            vec![Obstacle::new(&grid, ObstacleKind::Car, 7, 0.0, 1.0)],
            grid.board_width,
        );
        let tiles = compose(&state);
        assert_eq!(tiles[7][0], Tile::Car);
        assert!(tiles[6].iter().all(|t| *t == Tile::Road));
    }
}
