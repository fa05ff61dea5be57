//! Lane layout and cell/pixel conversion
//!
//! The board is a square of `grid_size` rows. Row 0 (the far bank) and the
//! last row (the start bank) are safe, rows 1..=5 are water and everything in
//! between is road.

use std::ops::Range;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::WATER_LAST_ROW;

/// Hazard type of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Safe,
    Water,
    Road,
}

/// Immutable board geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub grid_size: u32,
    pub board_width: f32,
    pub cell_size: f32,
}

impl Grid {
    pub fn new(grid_size: u32, board_width: f32) -> Self {
        Self {
            grid_size,
            board_width,
            cell_size: board_width / grid_size as f32,
        }
    }

    /// Classify a row. Pure function of the index.
    pub fn row_kind(&self, row: u32) -> RowKind {
        if row == 0 || row == self.last_index() {
            RowKind::Safe
        } else if row <= WATER_LAST_ROW {
            RowKind::Water
        } else {
            RowKind::Road
        }
    }

    /// Pixel offset of a cell index along either axis
    #[inline]
    pub fn cell_to_pixel(&self, index: u32) -> f32 {
        index as f32 * self.cell_size
    }

    /// Highest row/column index
    #[inline]
    pub fn last_index(&self) -> u32 {
        self.grid_size - 1
    }

    /// Largest legal pixel offset for the player on either axis
    pub fn max_offset(&self) -> f32 {
        self.cell_to_pixel(self.last_index())
    }

    /// Rows carrying logs
    pub fn water_rows(&self) -> Range<u32> {
        1..WATER_LAST_ROW + 1
    }

    /// Rows carrying cars. The first road row is a car-free median.
    pub fn car_rows(&self) -> Range<u32> {
        WATER_LAST_ROW + 2..self.last_index()
    }

    /// Bottom-center start cell (column, row)
    pub fn start_cell(&self) -> (u32, u32) {
        (self.grid_size / 2, self.last_index())
    }

    /// Pixel position of a cell
    pub fn cell_position(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(self.cell_to_pixel(col), self.cell_to_pixel(row))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::consts::GRID_SIZE, crate::consts::BOARD_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_classification() {
        let grid = Grid::default();
        assert_eq!(grid.row_kind(0), RowKind::Safe);
        assert_eq!(grid.row_kind(12), RowKind::Safe);
        for row in 1..=5 {
            assert_eq!(grid.row_kind(row), RowKind::Water);
        }
        for row in 6..=11 {
            assert_eq!(grid.row_kind(row), RowKind::Road);
        }
    }

    #[test]
    fn test_cell_size_derived_from_board() {
        let grid = Grid::new(13, 520.0);
        assert!((grid.cell_size - 40.0).abs() < f32::EPSILON);
        assert!((grid.max_offset() - 480.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_uneven_cell_size_keeps_bands() {
        let grid = Grid::new(13, 402.0);
        assert_eq!(grid.row_kind(6), RowKind::Road);
        assert_eq!(grid.row_kind(12), RowKind::Safe);
        assert_eq!(grid.start_cell(), (6, 12));
    }

    proptest! {
        #[test]
        fn prop_bands_depend_only_on_row(
            half in 4u32..16,
            width in 121.0f32..2000.0,
        ) {
            let grid = Grid::new(2 * half + 1, width);
            let last = grid.last_index();
            for row in 0..=last {
                let expected = if row == 0 || row == last {
                    RowKind::Safe
                } else if row <= WATER_LAST_ROW {
                    RowKind::Water
                } else {
                    RowKind::Road
                };
                prop_assert_eq!(grid.row_kind(row), expected);
            }
        }
    }

    #[test]
    fn test_lane_bands() {
        let grid = Grid::default();
        assert_eq!(grid.water_rows(), 1..6);
        assert_eq!(grid.car_rows(), 7..12);
        assert_eq!(grid.start_cell(), (6, 12));
    }
}
