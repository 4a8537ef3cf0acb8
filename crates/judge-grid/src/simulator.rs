//! Step-by-step replay of the contestant drone.
//!
//! One elementary move is checked in this order:
//!
//! 1. Map bounds (`X` upper, `X` lower, `Y` lower, `Y` upper).
//! 2. Level 2 and up: tunnel relocation, then the wall check on the cell the
//!    drone ends up in.
//! 3. Level 3 and up: collision with every other drone between the current
//!    tick and the next one.
//!
//! The tick belongs to the simulator, so each validation gets its own clock
//! starting at zero. It advances once per successful elementary move. A
//! simulator built with [`GridSimulator::with_move_limit`] refuses to step
//! once the tick reaches the limit, which bounds the work a single
//! submission can cause (a tunnel pair can keep a drone in a loop forever).

use judge_types::{Axis, Coord, Dimensions, Direction};
use tracing::trace;

use crate::error::MoveError;
use crate::map::MapDescription;
use crate::moves::MoveToken;

/// Outcome of replaying one move string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    /// Cell the drone stopped on.
    pub end: Coord,
    /// Elementary moves performed.
    pub movements: u64,
}

/// Replays routes against one map.
#[derive(Debug, Clone)]
pub struct GridSimulator<'a> {
    map: &'a MapDescription,
    tick: u64,
    move_limit: u64,
}

impl<'a> GridSimulator<'a> {
    /// Create an unlimited simulator at tick 0.
    pub const fn new(map: &'a MapDescription) -> Self {
        Self::with_move_limit(map, u64::MAX)
    }

    /// Create a simulator at tick 0 that performs at most `move_limit`
    /// elementary moves.
    pub const fn with_move_limit(map: &'a MapDescription, move_limit: u64) -> Self {
        Self {
            map,
            tick: 0,
            move_limit,
        }
    }

    /// The current tick: elementary moves performed so far.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Perform one elementary move from `position`.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] the move triggers. The tick does not
    /// advance on failure.
    pub fn step(&mut self, position: Coord, direction: Direction) -> Result<Coord, MoveError> {
        if self.tick >= self.move_limit {
            return Err(MoveError::MoveLimitExceeded {
                limit: self.move_limit,
            });
        }
        let level = self.map.level();
        let mut next = advance(self.map.dimensions(), position, direction)?;

        if level.has_obstacles() {
            if let Some(exit) = self.map.tunnel_exit(next) {
                trace!(tick = self.tick, entry = %next, %exit, "Tunnel taken");
                next = exit;
            }
            if self.map.is_wall(next) {
                return Err(MoveError::WallCollision { cell: next });
            }
        }

        if level.has_traffic() {
            self.check_traffic(position, next)?;
        }

        self.tick = self.tick.saturating_add(1);
        Ok(next)
    }

    /// Replay a whole run-length move string starting at `origin`.
    ///
    /// A token's direction is decoded when the replay reaches it, so an
    /// unknown character is only reported if every earlier move succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    pub fn replay(&mut self, origin: Coord, tokens: &[MoveToken]) -> Result<Replay, MoveError> {
        let mut position = origin;
        let mut movements = 0_u64;
        for token in tokens {
            if token.count == 0 {
                continue;
            }
            let direction = token.direction()?;
            for _ in 0..token.count {
                position = self.step(position, direction)?;
                movements = movements.saturating_add(1);
            }
        }
        Ok(Replay {
            end: position,
            movements,
        })
    }

    /// Check the move `from -> to` against every other drone's move over the
    /// same tick.
    ///
    /// When both drones keep the same column (or both keep the same row) they
    /// travel along one line, so passing through each other counts as a
    /// collision too. Otherwise only landing on the same cell does.
    fn check_traffic(&self, from: Coord, to: Coord) -> Result<(), MoveError> {
        let dimensions = self.map.dimensions();
        let next_tick = self.tick.saturating_add(1);
        for drone in self.map.drones() {
            let before = drone.position_at(self.tick, dimensions);
            let after = drone.position_at(next_tick, dimensions);
            let same_line = (before.x == after.x && from.x == to.x)
                || (before.y == after.y && from.y == to.y);
            if to == after || (same_line && to == before) {
                return Err(MoveError::DroneCollision { cell: to });
            }
        }
        Ok(())
    }
}

/// Move one cell from `position` and check the result against the map
/// bounds.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] naming the first violated bound.
pub fn advance(
    dimensions: Dimensions,
    position: Coord,
    direction: Direction,
) -> Result<Coord, MoveError> {
    let Some(next) = position.offset(direction) else {
        return Err(overflow_bound(dimensions, direction));
    };
    if dimensions.contains(next) {
        return Ok(next);
    }
    if next.x >= dimensions.width {
        return Err(MoveError::OutOfBounds {
            axis: Axis::X,
            bound: dimensions.width,
        });
    }
    if next.x < 0 {
        return Err(MoveError::OutOfBounds {
            axis: Axis::X,
            bound: 0,
        });
    }
    if next.y < 0 {
        return Err(MoveError::OutOfBounds {
            axis: Axis::Y,
            bound: 0,
        });
    }
    if next.y >= dimensions.height {
        return Err(MoveError::OutOfBounds {
            axis: Axis::Y,
            bound: dimensions.height,
        });
    }
    Ok(next)
}

/// The bound a move would have crossed when its coordinate overflows.
const fn overflow_bound(dimensions: Dimensions, direction: Direction) -> MoveError {
    match direction {
        Direction::Right => MoveError::OutOfBounds {
            axis: Axis::X,
            bound: dimensions.width,
        },
        Direction::Left => MoveError::OutOfBounds {
            axis: Axis::X,
            bound: 0,
        },
        Direction::Up => MoveError::OutOfBounds {
            axis: Axis::Y,
            bound: 0,
        },
        Direction::Down => MoveError::OutOfBounds {
            axis: Axis::Y,
            bound: dimensions.height,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use judge_types::Level;

    use super::*;
    use crate::moves::parse_moves;

    fn map(source: &str, level: Level) -> MapDescription {
        MapDescription::parse(source, level).unwrap()
    }

    fn tokens(moves: &str) -> Vec<MoveToken> {
        parse_moves(moves, 1).unwrap()
    }

    const OPEN: &str = "5;4\n0,0\n0\n0\n0\n0\n";

    #[test]
    fn bounds_checked_in_order() {
        let dims = Dimensions::new(5, 4);
        assert_eq!(
            advance(dims, Coord::new(4, 0), Direction::Right),
            Err(MoveError::OutOfBounds { axis: Axis::X, bound: 5 })
        );
        assert_eq!(
            advance(dims, Coord::new(0, 0), Direction::Left),
            Err(MoveError::OutOfBounds { axis: Axis::X, bound: 0 })
        );
        assert_eq!(
            advance(dims, Coord::new(0, 0), Direction::Up),
            Err(MoveError::OutOfBounds { axis: Axis::Y, bound: 0 })
        );
        assert_eq!(
            advance(dims, Coord::new(0, 3), Direction::Down),
            Err(MoveError::OutOfBounds { axis: Axis::Y, bound: 4 })
        );
        assert_eq!(advance(dims, Coord::new(0, 3), Direction::Up), Ok(Coord::new(0, 2)));
    }

    #[test]
    fn out_of_map_origin_reports_x_first() {
        let dims = Dimensions::new(5, 4);
        assert_eq!(
            advance(dims, Coord::new(9, -3), Direction::Right),
            Err(MoveError::OutOfBounds { axis: Axis::X, bound: 5 })
        );
    }

    #[test]
    fn coordinate_overflow_is_out_of_bounds() {
        let dims = Dimensions::new(5, 4);
        assert_eq!(
            advance(dims, Coord::new(i64::MAX, 0), Direction::Right),
            Err(MoveError::OutOfBounds { axis: Axis::X, bound: 5 })
        );
    }

    #[test]
    fn replay_counts_moves_and_ticks() {
        let map = map(OPEN, Level::TRAFFIC);
        let mut sim = GridSimulator::new(&map);
        let replay = sim.replay(Coord::new(0, 0), &tokens("3>2-")).unwrap();
        assert_eq!(replay, Replay { end: Coord::new(3, 2), movements: 5 });
        assert_eq!(sim.tick(), 5);
    }

    #[test]
    fn failed_step_does_not_advance_tick() {
        let map = map(OPEN, Level::BASIC);
        let mut sim = GridSimulator::new(&map);
        let err = sim.replay(Coord::new(0, 0), &tokens("2<"));
        assert_eq!(err, Err(MoveError::OutOfBounds { axis: Axis::X, bound: 0 }));
        assert_eq!(sim.tick(), 0);
    }

    #[test]
    fn unknown_token_reported_when_reached() {
        let map = map(OPEN, Level::BASIC);
        let mut sim = GridSimulator::new(&map);
        let err = sim.replay(Coord::new(0, 0), &tokens("1>1x"));
        assert_eq!(err, Err(MoveError::UnknownMovement { token: 'x' }));
        assert_eq!(sim.tick(), 1);

        // An earlier failure wins over a later unknown token.
        let mut sim = GridSimulator::new(&map);
        let err = sim.replay(Coord::new(0, 0), &tokens("1<1x"));
        assert_eq!(err, Err(MoveError::OutOfBounds { axis: Axis::X, bound: 0 }));
    }

    #[test]
    fn tunnel_loop_stops_at_move_limit() {
        // Stepping right onto (3,0) lands back on (0,0), forever.
        let source = "5;5\n0,0\n0\n0\n1\n3,0:0,0\n0\n";
        let map = map(source, Level::OBSTACLES);
        let mut sim = GridSimulator::with_move_limit(&map, 1_000);
        let err = sim.replay(Coord::new(1, 0), &tokens("18446744073709551615>"));
        assert_eq!(err, Err(MoveError::MoveLimitExceeded { limit: 1_000 }));
        assert_eq!(sim.tick(), 1_000);
    }

    #[test]
    fn move_limit_counts_across_replays() {
        let map = map(OPEN, Level::BASIC);
        let mut sim = GridSimulator::with_move_limit(&map, 4);
        assert!(sim.replay(Coord::new(0, 0), &tokens("3>")).is_ok());
        assert_eq!(
            sim.replay(Coord::new(3, 0), &tokens("2-")),
            Err(MoveError::MoveLimitExceeded { limit: 4 })
        );
        assert_eq!(sim.tick(), 4);
    }

    #[test]
    fn walls_only_apply_from_level_two() {
        let source = "5;4\n0,0\n0\n1\n2,0:2,3\n0\n0\n";
        let basic = map(source, Level::BASIC);
        let mut sim = GridSimulator::new(&basic);
        assert_eq!(sim.step(Coord::new(1, 1), Direction::Right), Ok(Coord::new(2, 1)));

        let walled = map(source, Level::OBSTACLES);
        let mut sim = GridSimulator::new(&walled);
        assert_eq!(
            sim.step(Coord::new(1, 1), Direction::Right),
            Err(MoveError::WallCollision { cell: Coord::new(2, 1) })
        );
    }

    #[test]
    fn tunnel_relocates_within_the_same_move() {
        let source = "6;6\n0,0\n0\n0\n1\n1,0:5,5\n0\n";
        let map = map(source, Level::OBSTACLES);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(sim.step(Coord::new(0, 0), Direction::Right), Ok(Coord::new(5, 5)));
        assert_eq!(sim.tick(), 1);
        assert_eq!(sim.step(Coord::new(5, 4), Direction::Down), Ok(Coord::new(1, 0)));
    }

    #[test]
    fn tunnel_exit_into_wall_crashes() {
        let source = "6;6\n0,0\n0\n1\n5,5:5,5\n1\n1,0:5,5\n0\n";
        let map = map(source, Level::OBSTACLES);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(
            sim.step(Coord::new(0, 0), Direction::Right),
            Err(MoveError::WallCollision { cell: Coord::new(5, 5) })
        );
    }

    #[test]
    fn landing_on_another_drone_collides() {
        // The other drone moves right along row 1: (0,1) at tick 0, (1,1) at tick 1.
        let source = "5;4\n0,0\n0\n0\n0\n1\n0,1;1>\n";
        let map = map(source, Level::TRAFFIC);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(
            sim.step(Coord::new(1, 0), Direction::Down),
            Err(MoveError::DroneCollision { cell: Coord::new(1, 1) })
        );
    }

    #[test]
    fn swapping_along_a_line_collides() {
        // Other drone: (3,1) then (2,1). Contestant: (2,1) then (3,1).
        let source = "5;4\n0,0\n0\n0\n0\n1\nt*4+3,1\n";
        let map = map(source, Level::TRAFFIC);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(
            sim.step(Coord::new(2, 1), Direction::Right),
            Err(MoveError::DroneCollision { cell: Coord::new(3, 1) })
        );
    }

    #[test]
    fn crossing_paths_on_different_axes_do_not_collide() {
        // Other drone moves down column 2: (2,0) then (2,1).
        // Contestant moves right into (2,0) after the other drone left it.
        let source = "5;4\n0,0\n0\n0\n0\n1\n2,t\n";
        let map = map(source, Level::TRAFFIC);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(sim.step(Coord::new(1, 0), Direction::Right), Ok(Coord::new(2, 0)));
    }

    #[test]
    fn drones_ignored_below_level_three() {
        let source = "5;4\n0,0\n0\n0\n0\n1\n0,1;1>\n";
        let map = map(source, Level::OBSTACLES);
        let mut sim = GridSimulator::new(&map);
        assert_eq!(sim.step(Coord::new(1, 0), Direction::Down), Ok(Coord::new(1, 1)));
    }
}
