//! Points for a valid submission.
//!
//! `points = base * 0.99 ^ log10(total_movements / level)`
//!
//! Fewer moves score more. Harder levels divide the move count, so the same
//! route length is worth more there.

use judge_types::{DatasetSize, Level};

/// Penalty factor applied per decade of movements.
pub const DECAY: f64 = 0.99;

/// Score `total_movements` for a dataset class and level.
///
/// Returns `None` for zero movements, where the logarithm is undefined.
pub fn score(total_movements: u64, dataset: DatasetSize, level: Level) -> Option<f64> {
    if total_movements == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let movements = total_movements as f64;
    let ratio = movements / f64::from(level.get());
    Some(dataset.base_points() * DECAY.powf(ratio.log10()))
}
