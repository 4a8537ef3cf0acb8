//! Error types for the `judge-grid` crate.
//!
//! [`FormatError`] covers malformed problem-instance and submission text and
//! always carries the 1-based line it was found on. [`MoveError`] covers the
//! ways a single elementary move can fail during replay; its `Display`
//! output is the exact message shown to contestants.

use std::path::PathBuf;

use judge_types::{Axis, Coord};

/// Malformed input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The input ended before a declared section was complete.
    #[error("Malformed input at line {line}: unexpected end of file")]
    UnexpectedEof {
        /// Line that was expected to exist.
        line: usize,
    },

    /// A field that must be an integer is not one.
    #[error("Malformed input at line {line}: expected a number, found '{value}'")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// The rejected field text.
        value: String,
    },

    /// A line has the wrong number of fields.
    #[error("Malformed input at line {line}: expected {expected} fields, found {found}")]
    WrongArity {
        /// Offending line.
        line: usize,
        /// Accepted field count(s), human readable.
        expected: &'static str,
        /// Fields actually present.
        found: usize,
    },

    /// A field parsed but its value is not allowed.
    #[error("Malformed input at line {line}: {reason}")]
    InvalidValue {
        /// Offending line.
        line: usize,
        /// What is wrong with the value.
        reason: String,
    },

    /// A route refers to a delivery point the map does not declare.
    #[error("Malformed input at line {line}: delivery point with id {point_id} does not exist")]
    UnknownDeliveryPoint {
        /// Offending line.
        line: usize,
        /// The referenced id.
        point_id: u32,
    },
}

/// Failure of a single elementary move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move leaves the map. `bound` is `0` for the lower edge and the
    /// map extent for the upper edge.
    #[error("Drone gets out of map at {}", bound_label(*axis, *bound))]
    OutOfBounds {
        /// Axis on which the map was left.
        axis: Axis,
        /// The violated bound.
        bound: i64,
    },

    /// The move (after any tunnel relocation) ends on a wall cell.
    #[error("Drone crushed into a wall at {cell}!!")]
    WallCollision {
        /// The wall cell.
        cell: Coord,
    },

    /// The move runs into, or swaps places with, another drone.
    #[error("Your drone collided with another drone at {cell} (Nobody was hurt ;)")]
    DroneCollision {
        /// Where the contestant drone ended up.
        cell: Coord,
    },

    /// The move string contains a character that is not a direction.
    #[error("Unexpected movement type found: {token}")]
    UnknownMovement {
        /// The unknown character.
        token: char,
    },

    /// The submission asks for more elementary moves than the judge replays.
    #[error("Routes exceed the limit of {limit} movements")]
    MoveLimitExceeded {
        /// Elementary moves allowed per submission.
        limit: u64,
    },
}

fn bound_label(axis: Axis, bound: i64) -> String {
    if bound == 0 {
        format!("{axis}<0")
    } else {
        format!("{axis}={bound}")
    }
}

/// Failure to load a map description from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read map file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file content is malformed.
    #[error("invalid map file {}: {source}", path.display())]
    Format {
        /// Path that was read.
        path: PathBuf,
        /// The underlying format error.
        source: FormatError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_messages() {
        let upper_x = MoveError::OutOfBounds { axis: Axis::X, bound: 100 };
        let lower_x = MoveError::OutOfBounds { axis: Axis::X, bound: 0 };
        let lower_y = MoveError::OutOfBounds { axis: Axis::Y, bound: 0 };
        let upper_y = MoveError::OutOfBounds { axis: Axis::Y, bound: 80 };
        assert_eq!(upper_x.to_string(), "Drone gets out of map at X=100");
        assert_eq!(lower_x.to_string(), "Drone gets out of map at X<0");
        assert_eq!(lower_y.to_string(), "Drone gets out of map at Y<0");
        assert_eq!(upper_y.to_string(), "Drone gets out of map at Y=80");
    }

    #[test]
    fn collision_messages() {
        let wall = MoveError::WallCollision { cell: Coord::new(23, 5) };
        assert_eq!(wall.to_string(), "Drone crushed into a wall at (23, 5)!!");
        let drone = MoveError::DroneCollision { cell: Coord::new(40, 0) };
        assert_eq!(
            drone.to_string(),
            "Your drone collided with another drone at (40, 0) (Nobody was hurt ;)"
        );
        let unknown = MoveError::UnknownMovement { token: '*' };
        assert_eq!(unknown.to_string(), "Unexpected movement type found: *");
        let limit = MoveError::MoveLimitExceeded { limit: 1_000 };
        assert_eq!(limit.to_string(), "Routes exceed the limit of 1000 movements");
    }
}
