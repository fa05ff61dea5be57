//! Moving cars and floating logs
//!
//! Obstacles slide continuously along x while their y stays locked to the
//! row they were spawned in. Only the row is grid-snapped.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::*;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Deadly on contact
    Car,
    /// Rideable; the only footing in the water band
    Log,
}

impl ObstacleKind {
    pub fn width(&self) -> f32 {
        match self {
            ObstacleKind::Car => CAR_WIDTH,
            ObstacleKind::Log => LOG_WIDTH,
        }
    }
}

/// A single obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    kind: ObstacleKind,
    /// Lane index; all lane lookups compare this, never the pixel y
    row: u32,
    /// x slides every tick, y is fixed at creation
    pub pos: Vec2,
    /// Signed pixels per tick (sign is direction)
    pub speed: f32,
}

impl Obstacle {
    /// Place an obstacle in `row` at pixel offset `x`
    pub fn new(grid: &Grid, kind: ObstacleKind, row: u32, x: f32, speed: f32) -> Self {
        Self {
            kind,
            row,
            pos: Vec2::new(x, grid.cell_to_pixel(row)),
            speed,
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn width(&self) -> f32 {
        self.kind.width()
    }

    /// Advance one tick, wrapping around the board edges
    pub fn advance(&mut self, board_width: f32) {
        self.pos.x += self.speed;
        if self.speed > 0.0 && self.pos.x > board_width {
            self.pos.x = -self.width();
        } else if self.speed < 0.0 && self.pos.x < -self.width() {
            self.pos.x = board_width;
        }
    }
}

/// All obstacles of a round
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    pub obstacles: Vec<Obstacle>,
    board_width: f32,
}

impl ObstacleSet {
    /// Build the fixed lane layout with randomized offsets and speeds.
    ///
    /// Every obstacle in a row shares that row's speed. Odd rows travel right,
    /// even rows travel left.
    pub fn initialize<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let mut obstacles = Vec::new();

        for row in grid.car_rows() {
            let speed = lane_speed(rng, row, CAR_SPEED_MIN, CAR_SPEED_MAX);
            for _ in 0..CARS_PER_ROW {
                obstacles.push(spawn(rng, grid, ObstacleKind::Car, row, speed));
            }
        }

        for row in grid.water_rows() {
            let speed = lane_speed(rng, row, LOG_SPEED_MIN, LOG_SPEED_MAX);
            for _ in 0..LOGS_PER_ROW {
                obstacles.push(spawn(rng, grid, ObstacleKind::Log, row, speed));
            }
        }

        log::debug!("Spawned {} obstacles", obstacles.len());

        Self {
            obstacles,
            board_width: grid.board_width,
        }
    }

    /// Build a set from explicit obstacles
    pub fn from_obstacles(obstacles: Vec<Obstacle>, board_width: f32) -> Self {
        Self {
            obstacles,
            board_width,
        }
    }

    /// Advance every obstacle by one tick
    pub fn tick(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(self.board_width);
        }
    }

    pub fn cars(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Car)
    }

    /// Logs in lane `row`
    pub fn logs_in_row(&self, row: u32) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.kind == ObstacleKind::Log && o.row == row)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

fn lane_speed<R: Rng + ?Sized>(rng: &mut R, row: u32, min: f32, max: f32) -> f32 {
    let magnitude = rng.random_range(min..max);
    if row % 2 != 0 { magnitude } else { -magnitude }
}

fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    kind: ObstacleKind,
    row: u32,
    speed: f32,
) -> Obstacle {
    let x = rng.random_range(0.0..grid.board_width - SPAWN_MARGIN);
    Obstacle::new(grid, kind, row, x, speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_layout_counts() {
        let grid = Grid::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let set = ObstacleSet::initialize(&grid, &mut rng);

        assert_eq!(set.cars().count(), 5 * CARS_PER_ROW);
        assert_eq!(set.len(), 5 * CARS_PER_ROW + 5 * LOGS_PER_ROW);
        for row in grid.water_rows() {
            assert_eq!(set.logs_in_row(row).count(), LOGS_PER_ROW);
        }
    }

    #[test]
    fn test_lane_speed_ranges_and_direction() {
        let grid = Grid::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let set = ObstacleSet::initialize(&grid, &mut rng);

        for obstacle in &set.obstacles {
            let row = obstacle.row();
            assert_eq!(obstacle.pos.y, grid.cell_to_pixel(row));
            assert!(obstacle.pos.x >= 0.0 && obstacle.pos.x < grid.board_width - SPAWN_MARGIN);
            assert_eq!(obstacle.speed > 0.0, row % 2 != 0);

            let magnitude = obstacle.speed.abs();
            match obstacle.kind() {
                ObstacleKind::Car => {
                    assert!((CAR_SPEED_MIN..CAR_SPEED_MAX).contains(&magnitude));
                    assert_eq!(obstacle.width(), CAR_WIDTH);
                }
                ObstacleKind::Log => {
                    assert!((LOG_SPEED_MIN..LOG_SPEED_MAX).contains(&magnitude));
                    assert_eq!(obstacle.width(), LOG_WIDTH);
                }
            }
        }
    }

    #[test]
    fn test_row_shares_speed() {
        let grid = Grid::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let set = ObstacleSet::initialize(&grid, &mut rng);

        for row in grid.water_rows() {
            let speeds: Vec<f32> = set.logs_in_row(row).map(|o| o.speed).collect();
            assert!(speeds.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let grid = Grid::default();
        let a = ObstacleSet::initialize(&grid, &mut Pcg32::seed_from_u64(42));
        let b = ObstacleSet::initialize(&grid, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_lanes_on_uneven_cells() {
        // 402 / 13 is not a whole number of pixels
        let grid = Grid::new(13, 402.0);
        let set = ObstacleSet::initialize(&grid, &mut Pcg32::seed_from_u64(11));
        for row in grid.water_rows() {
            assert_eq!(set.logs_in_row(row).count(), LOGS_PER_ROW);
        }
        for car in set.cars() {
            assert!(grid.car_rows().contains(&car.row()));
        }
    }

    #[test]
    fn test_wrap_right_edge() {
        let grid = Grid::default();
        let mut car = Obstacle::new(&grid, ObstacleKind::Car, 7, 519.0, 2.0);
        car.advance(520.0);
        assert_eq!(car.pos.x, -CAR_WIDTH);
        assert_eq!(car.pos.y, 280.0);
        assert_eq!(car.row(), 7);
    }

    #[test]
    fn test_wrap_left_edge() {
        let grid = Grid::default();
        let mut log = Obstacle::new(&grid, ObstacleKind::Log, 2, -119.5, -1.0);
        log.advance(520.0);
        assert_eq!(log.pos.x, 520.0);
    }

    proptest! {
        #[test]
        fn prop_tick_stays_within_one_wrap_cycle(
            x in 0.0f32..440.0,
            magnitude in 0.5f32..3.0,
            rightward in any::<bool>(),
            is_car in any::<bool>(),
            ticks in 1usize..2000,
        ) {
            let kind = if is_car { ObstacleKind::Car } else { ObstacleKind::Log };
            let speed = if rightward { magnitude } else { -magnitude };
            let mut obstacle = Obstacle::new(&Grid::default(), kind, 3, x, speed);
            let width = obstacle.width();

            for _ in 0..ticks {
                obstacle.advance(520.0);
                prop_assert!(obstacle.pos.x <= 520.0 + width);
                prop_assert!(obstacle.pos.x >= -2.0 * width);
                prop_assert_eq!(obstacle.pos.y, 120.0);
            }
        }
    }
}
