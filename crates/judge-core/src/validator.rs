//! Whole-submission validation.
//!
//! Routes are replayed one after another on a single [`GridSimulator`], so
//! the tick keeps running across routes and the other drones keep moving.
//! The first failing check ends validation.
//!
//! Per route, in order:
//!
//! 1. Parse the line and resolve the delivery point id.
//! 2. Required position of the point against the route's position.
//! 3. Replay of the moves from the declared origin.
//! 4. End cell against the delivery point.
//!
//! After the last route the reported total is compared with the replayed
//! one, then every delivery point must have been visited.
//!
//! Replay stops with [`judge_grid::MoveError::MoveLimitExceeded`] once the submission
//! has used up its movement limit, counted across all routes.

use std::collections::BTreeSet;

use judge_grid::{FormatError, GridSimulator, MapDescription};
use tracing::debug;

use crate::error::ValidationError;
use crate::submission::Submission;

/// Verdict on one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every check passed.
    Success {
        /// The reported (and verified) number of elementary moves.
        total_movements: u64,
    },
    /// The first check that failed.
    Failure {
        /// Why the submission was rejected.
        reason: ValidationError,
    },
}

impl ValidationOutcome {
    /// Whether the submission passed.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<u64, ValidationError>> for ValidationOutcome {
    fn from(result: Result<u64, ValidationError>) -> Self {
        match result {
            Ok(total_movements) => Self::Success { total_movements },
            Err(reason) => Self::Failure { reason },
        }
    }
}

/// Elementary moves replayed per submission unless configured otherwise.
pub const DEFAULT_MAX_MOVEMENTS: u64 = 10_000_000;

/// Validate `submission` against `map` with [`DEFAULT_MAX_MOVEMENTS`].
///
/// The result depends only on the two inputs.
pub fn validate(map: &MapDescription, submission: &str) -> ValidationOutcome {
    check(map, submission, DEFAULT_MAX_MOVEMENTS).into()
}

/// Validate `submission` against `map`, replaying at most `max_movements`
/// elementary moves, and return the verified total.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn check(
    map: &MapDescription,
    submission: &str,
    max_movements: u64,
) -> Result<u64, ValidationError> {
    let submission = Submission::parse(submission)?;
    let mut simulator = GridSimulator::with_move_limit(map, max_movements);
    let mut accumulated = 0_u64;
    let mut visited = BTreeSet::new();
    let mut position = 1_u64;

    for route in submission.routes() {
        let route = route?;
        let Some(point) = map.delivery_point(route.point_id) else {
            return Err(FormatError::UnknownDeliveryPoint {
                line: route.line,
                point_id: route.point_id,
            }
            .into());
        };

        let misplaced = point
            .required_position
            .filter(|required| u64::from(*required) != position);
        if let Some(required) = misplaced {
            return Err(ValidationError::Sequence {
                point_id: point.id,
                expected: required,
                found: position,
            });
        }

        let replay = simulator.replay(route.origin, &route.moves)?;
        debug!(
            point_id = point.id,
            origin = %route.origin,
            end = %replay.end,
            movements = replay.movements,
            tick = simulator.tick(),
            "Route replayed"
        );

        if replay.end != point.coords {
            return Err(ValidationError::DestinationMismatch {
                point_id: point.id,
                origin: route.origin,
                actual: replay.end,
                expected: point.coords,
            });
        }

        accumulated = accumulated.saturating_add(replay.movements);
        visited.insert(point.id);
        position = position.saturating_add(1);
    }

    let reported = i128::from(submission.reported_total());
    let replayed = i128::from(accumulated);
    if reported != replayed {
        return Err(ValidationError::MovementCountMismatch {
            diff: reported.abs_diff(replayed),
        });
    }

    if visited.len() != map.delivery_points().len() {
        return Err(ValidationError::IncompleteCoverage);
    }

    Ok(accumulated)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use judge_grid::MoveError;
    use judge_types::Level;

    use super::*;

    fn map() -> MapDescription {
        MapDescription::parse("5;5\n0,0\n2\n2,0\n2,2\n", Level::BASIC).unwrap()
    }

    #[test]
    fn accepts_complete_submission() {
        let outcome = validate(&map(), "4\n1;0,0;2>\n2;2,0;2-\n");
        assert_eq!(outcome, ValidationOutcome::Success { total_movements: 4 });
        assert!(outcome.is_success());
    }

    #[test]
    fn unknown_point_is_format_error() {
        let outcome = validate(&map(), "2\n3;0,0;2>\n");
        assert_eq!(
            outcome,
            ValidationOutcome::Failure {
                reason: FormatError::UnknownDeliveryPoint { line: 2, point_id: 3 }.into(),
            }
        );
    }

    #[test]
    fn coverage_checked_after_count() {
        let outcome = validate(&map(), "3\n1;0,0;2>\n");
        assert_eq!(
            outcome,
            ValidationOutcome::Failure {
                reason: ValidationError::MovementCountMismatch { diff: 1 },
            }
        );
        let outcome = validate(&map(), "2\n1;0,0;2>\n");
        assert_eq!(
            outcome,
            ValidationOutcome::Failure {
                reason: ValidationError::IncompleteCoverage,
            }
        );
    }

    #[test]
    fn movement_limit_spans_routes() {
        let submission = "4\n1;0,0;2>\n2;2,0;2-\n";
        assert_eq!(check(&map(), submission, 4), Ok(4));
        assert_eq!(
            check(&map(), submission, 3),
            Err(ValidationError::Move(MoveError::MoveLimitExceeded { limit: 3 }))
        );
    }

    #[test]
    fn route_error_stops_before_later_format_error() {
        let outcome = validate(&map(), "4\n1;0,0;3>\ngarbage\n");
        assert!(matches!(
            outcome,
            ValidationOutcome::Failure {
                reason: ValidationError::DestinationMismatch { point_id: 1, .. }
            }
        ));
    }
}
