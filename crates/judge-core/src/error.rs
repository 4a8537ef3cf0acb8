//! Error types for route validation and the judge facade.
//!
//! [`ValidationError`] is the closed set of reasons a submission can be
//! rejected for. Its `Display` output is the message returned to the
//! contestant. [`JudgeError`] covers requests the judge cannot serve at all.

use judge_grid::{FormatError, MoveError};
use judge_types::{Coord, Difficulty};

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The submission text is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A move failed during replay.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// A delivery point with a required position was served out of order.
    #[error("Delivery point with id {point_id} needs to be at position {expected}, found at {found}")]
    Sequence {
        /// The delivery point.
        point_id: u32,
        /// Position the point requires.
        expected: u32,
        /// Position of the route in the submission.
        found: u64,
    },

    /// A route ends somewhere other than its delivery point.
    #[error(
        "Movements to reach delivery point with id {point_id} from {origin} end up at {actual}, expected {expected}"
    )]
    DestinationMismatch {
        /// The delivery point.
        point_id: u32,
        /// Declared origin of the route.
        origin: Coord,
        /// Where the replay stopped.
        actual: Coord,
        /// Where the delivery point is.
        expected: Coord,
    },

    /// The reported total differs from the replayed total.
    #[error("Reported movements at beginning of file don't match those in the routes, differ by {diff}")]
    MovementCountMismatch {
        /// Absolute difference.
        diff: u128,
    },

    /// Some delivery point has no route.
    #[error("Drone doesn't visit all of the delivery points")]
    IncompleteCoverage,
}

/// A judging request that cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JudgeError {
    /// No instance with this name is configured.
    #[error("unknown instance: {instance}")]
    UnknownInstance {
        /// The requested instance.
        instance: String,
    },

    /// The instance has no map for the level this difficulty maps onto.
    #[error("instance {instance} has no map for difficulty '{difficulty}'")]
    LevelNotConfigured {
        /// The requested instance.
        instance: String,
        /// The requested difficulty.
        difficulty: Difficulty,
    },
}
