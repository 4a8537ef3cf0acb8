//! Verdict payloads returned to the contest platform.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{DatasetSize, Level};

/// Result of judging one submission.
///
/// `error` carries exactly one human-readable reason when `success` is
/// false. A failing submission is never partially scored: `points` is `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JudgeReport {
    /// Whether the submission passed every check.
    pub success: bool,
    /// Reason for rejection, absent on success.
    pub error: Option<String>,
    /// Points awarded.
    pub points: f64,
}

impl JudgeReport {
    /// A passing verdict worth `points`.
    pub const fn accepted(points: f64) -> Self {
        Self {
            success: true,
            error: None,
            points,
        }
    }

    /// A failing verdict with its reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            points: 0.0,
        }
    }
}

/// Public description of a configured problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InstanceSummary {
    /// Instance name used in the validator URL.
    pub name: String,
    /// Dataset size class used for scoring.
    pub dataset: DatasetSize,
    /// Levels that have a map loaded, ascending.
    pub levels: Vec<Level>,
}
