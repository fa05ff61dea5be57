//! The player token

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// One-cell move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player position, stored as a grid cell so the pixel position is always
/// an exact multiple of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub col: u32,
    pub row: u32,
}

impl Player {
    /// Spawn on the start bank
    pub fn new(grid: &Grid) -> Self {
        let (col, row) = grid.start_cell();
        Self { col, row }
    }

    /// Pixel position (top-left of the player's cell)
    pub fn pos(&self, grid: &Grid) -> Vec2 {
        grid.cell_position(self.col, self.row)
    }

    /// Step one cell. A move that would leave the board is rejected.
    ///
    /// Returns true if the position changed.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let last = grid.last_index();
        let (col, row) = match direction {
            Direction::Up if self.row > 0 => (self.col, self.row - 1),
            Direction::Down if self.row < last => (self.col, self.row + 1),
            Direction::Left if self.col > 0 => (self.col - 1, self.row),
            Direction::Right if self.col < last => (self.col + 1, self.row),
            _ => return false,
        };
        self.col = col;
        self.row = row;
        true
    }

    /// Back to the start bank
    pub fn reset(&mut self, grid: &Grid) {
        *self = Self::new(grid);
    }

    pub fn at_goal(&self) -> bool {
        self.row == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    #[test]
    fn test_spawn_bottom_center() {
        let grid = Grid::default();
        let player = Player::new(&grid);
        assert_eq!(player.pos(&grid), Vec2::new(240.0, 480.0));
    }

    #[test]
    fn test_step_moves_one_cell() {
        let grid = Grid::default();
        let mut player = Player::new(&grid);
        assert!(player.step(Direction::Up, &grid));
        assert_eq!(player.pos(&grid), Vec2::new(240.0, 440.0));
        assert!(player.step(Direction::Left, &grid));
        assert_eq!(player.pos(&grid), Vec2::new(200.0, 440.0));
    }

    #[test]
    fn test_step_rejected_at_edge() {
        let grid = Grid::default();
        let mut player = Player::new(&grid);
        // Start row is the bottom edge
        assert!(!player.step(Direction::Down, &grid));
        assert_eq!(player, Player::new(&grid));

        player.col = 0;
        assert!(!player.step(Direction::Left, &grid));
        assert_eq!(player.col, 0);
    }

    #[test]
    fn test_reset_from_anywhere() {
        let grid = Grid::default();
        let mut player = Player { col: 1, row: 3 };
        player.reset(&grid);
        assert_eq!(player.pos(&grid), Vec2::new(6.0 * 40.0, 12.0 * 40.0));
    }

    proptest! {
        #[test]
        fn prop_moves_stay_on_board(moves in proptest::collection::vec(direction(), 0..200)) {
            let grid = Grid::default();
            let mut player = Player::new(&grid);
            for direction in moves {
                player.step(direction, &grid);
                let pos = player.pos(&grid);
                prop_assert!(pos.x >= 0.0 && pos.x <= grid.max_offset());
                prop_assert!(pos.y >= 0.0 && pos.y <= grid.max_offset());
            }
            player.reset(&grid);
            prop_assert_eq!(player.pos(&grid), Vec2::new(240.0, 480.0));
        }
    }
}
