//! Collision classification and time bonus
//!
//! The two bands use different hit tests. In water the player is probed at a
//! single point (`x + LOG_FOOTING_OFFSET`) against each log's raw span; on the
//! road a full 40x40 box is tested against each car. Both are kept as is.

use glam::Vec2;

use super::grid::{Grid, RowKind};
use super::obstacle::{Obstacle, ObstacleSet};
use super::player::Player;
use crate::consts::*;

/// What the player's current position means this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing happens
    Clear,
    /// In a water row and not standing on any log
    Drowned,
    /// Hit box overlaps a car
    HitByCar,
    /// Reached the far bank
    ReachedGoal,
}

impl Outcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, Outcome::Drowned | Outcome::HitByCar)
    }
}

/// Classify the player against the obstacle set.
///
/// The band comes from the player's row index, the hit tests from its pixel
/// position. Checks run in order water, road, goal; a collision
/// short-circuits the rest.
pub fn classify(grid: &Grid, player: &Player, obstacles: &ObstacleSet) -> Outcome {
    let pos = player.pos(grid);

    if grid.row_kind(player.row) == RowKind::Water {
        let on_log = obstacles
            .logs_in_row(player.row)
            .any(|log| stands_on_log(pos, log));
        if !on_log {
            return Outcome::Drowned;
        }
    }

    if obstacles.cars().any(|car| overlaps_car(pos, car)) {
        return Outcome::HitByCar;
    }

    if player.at_goal() {
        return Outcome::ReachedGoal;
    }

    Outcome::Clear
}

/// Footing probe against a log's inclusive span
#[inline]
pub fn stands_on_log(player_pos: Vec2, log: &Obstacle) -> bool {
    let probe = player_pos.x + LOG_FOOTING_OFFSET;
    probe >= log.pos.x && probe <= log.pos.x + log.width()
}

/// Strict AABB overlap between the player box and a car
#[inline]
pub fn overlaps_car(player_pos: Vec2, car: &Obstacle) -> bool {
    player_pos.x + PLAYER_HITBOX > car.pos.x
        && player_pos.x < car.pos.x + car.width()
        && player_pos.y + PLAYER_HITBOX > car.pos.y
        && player_pos.y < car.pos.y + CAR_HITBOX_HEIGHT
}

/// Bonus for a quick crossing: floor(2000 / elapsed_ms).
///
/// A zero-length measurement is treated as 1ms, giving the maximum bonus.
pub fn time_bonus(elapsed_ms: u64) -> u64 {
    TIME_BONUS_NUMERATOR / elapsed_ms.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleKind;

    fn set(obstacles: Vec<Obstacle>) -> ObstacleSet {
        ObstacleSet::from_obstacles(obstacles, BOARD_WIDTH)
    }

    #[test]
    fn test_footing_probe_against_log_span() {
        let grid = Grid::default();
        let log = Obstacle::new(&grid, ObstacleKind::Log, 3, 100.0, 1.0);

        // 70 + 20 = 90, left of [100, 220]
        assert!(!stands_on_log(Vec2::new(70.0, 120.0), &log));
        // 90 + 20 = 110, inside
        assert!(stands_on_log(Vec2::new(90.0, 120.0), &log));
    }

    #[test]
    fn test_water_without_log_drowns() {
        let grid = Grid::default();
        let obstacles = set(vec![Obstacle::new(&grid, ObstacleKind::Log, 3, 100.0, 1.0)]);

        // Column 1: probe at 60
        assert_eq!(classify(&grid, &Player { col: 1, row: 3 }, &obstacles), Outcome::Drowned);
        // Column 2: probe at 100, the log's left end
        assert_eq!(classify(&grid, &Player { col: 2, row: 3 }, &obstacles), Outcome::Clear);
    }

    #[test]
    fn test_log_span_is_inclusive() {
        let grid = Grid::default();
        let log = Obstacle::new(&grid, ObstacleKind::Log, 1, 100.0, 1.0);
        assert!(stands_on_log(Vec2::new(80.0, 40.0), &log));
        assert!(stands_on_log(Vec2::new(200.0, 40.0), &log));
        assert!(!stands_on_log(Vec2::new(201.0, 40.0), &log));
    }

    #[test]
    fn test_log_in_other_row_does_not_help() {
        let grid = Grid::default();
        let obstacles = set(vec![Obstacle::new(&grid, ObstacleKind::Log, 2, 100.0, 1.0)]);
        assert_eq!(classify(&grid, &Player { col: 3, row: 3 }, &obstacles), Outcome::Drowned);
    }

    #[test]
    fn test_road_overlap_hits() {
        let grid = Grid::default();
        let mut car = Obstacle::new(&grid, ObstacleKind::Car, 10, 50.0, 2.0);
        assert_eq!(car.pos.y, 400.0);
        assert!(overlaps_car(Vec2::new(60.0, 400.0), &car));

        car.pos.y = 420.0;
        assert!(overlaps_car(Vec2::new(60.0, 420.0), &car));

        let obstacles = set(vec![Obstacle::new(&grid, ObstacleKind::Car, 10, 20.0, 2.0)]);
        assert_eq!(classify(&grid, &Player { col: 1, row: 10 }, &obstacles), Outcome::HitByCar);
    }

    #[test]
    fn test_road_edges_do_not_touch() {
        let grid = Grid::default();
        let car = Obstacle::new(&grid, ObstacleKind::Car, 7, 100.0, 2.0);
        // Player box ends exactly where the car starts
        assert!(!overlaps_car(Vec2::new(60.0, 280.0), &car));
        // Player starts exactly where the car ends
        assert!(!overlaps_car(Vec2::new(180.0, 280.0), &car));
        // Row above
        assert!(!overlaps_car(Vec2::new(100.0, 240.0), &car));
        assert!(overlaps_car(Vec2::new(61.0, 280.0), &car));
    }

    #[test]
    fn test_goal_and_safe_rows() {
        let grid = Grid::default();
        let obstacles = set(Vec::new());
        assert_eq!(classify(&grid, &Player { col: 6, row: 0 }, &obstacles), Outcome::ReachedGoal);
        assert_eq!(classify(&grid, &Player { col: 6, row: 12 }, &obstacles), Outcome::Clear);
        // Median row has no cars
        assert_eq!(classify(&grid, &Player { col: 6, row: 6 }, &obstacles), Outcome::Clear);
    }

    #[test]
    fn test_uneven_cells_median_and_bank_are_dry() {
        // 402 / 13 = 30.923..; rows start at fractional pixel offsets
        let grid = Grid::new(13, 402.0);
        let obstacles = set(Vec::new());
        for col in 0..13 {
            assert_eq!(classify(&grid, &Player { col, row: 6 }, &obstacles), Outcome::Clear);
            assert_eq!(classify(&grid, &Player { col, row: 12 }, &obstacles), Outcome::Clear);
        }
        assert_eq!(classify(&grid, &Player { col: 6, row: 5 }, &obstacles), Outcome::Drowned);
    }

    #[test]
    fn test_time_bonus() {
        assert_eq!(time_bonus(2000), 1);
        assert_eq!(time_bonus(2001), 0);
        assert_eq!(time_bonus(5000), 0);
        assert_eq!(time_bonus(1000), 2);
        assert_eq!(time_bonus(10), 200);
        assert!(time_bonus(500) > time_bonus(1500));
    }

    #[test]
    fn test_time_bonus_zero_elapsed() {
        assert_eq!(time_bonus(0), TIME_BONUS_NUMERATOR);
    }
}
