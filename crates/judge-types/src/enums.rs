//! Difficulty tiers and dataset size classes.
//!
//! The contest platform labels submissions with a difficulty name. The judge
//! maps each name onto a numeric [`Level`] that decides which rule sets are
//! active during replay:
//!
//! | Difficulty | Level | Rules |
//! |------------|-------|-------|
//! | `very easy`, `easy` | 1 | bounds only |
//! | `medium` | 2 | + walls and tunnels |
//! | `hard`, `insane` | 3 | + other drones |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error returned when a difficulty or dataset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    /// What was being parsed (`difficulty`, `dataset size`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Numeric difficulty level of a map.
///
/// Level 1 only checks map bounds, level 2 adds walls and tunnels, level 3
/// and above add the other drones. The level also divides the movement count
/// in the scoring formula.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export, export_to = "bindings/")]
pub struct Level(u8);

impl Level {
    /// Bounds-only level.
    pub const BASIC: Self = Self(1);
    /// Walls and tunnels.
    pub const OBSTACLES: Self = Self(2);
    /// Walls, tunnels and other drones.
    pub const TRAFFIC: Self = Self(3);

    /// Create a level. Level 0 does not exist.
    pub const fn new(level: u8) -> Option<Self> {
        if level == 0 { None } else { Some(Self(level)) }
    }

    /// The numeric value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether walls and tunnels are part of the map at this level.
    pub const fn has_obstacles(self) -> bool {
        self.0 > 1
    }

    /// Whether other drones fly over the map at this level.
    pub const fn has_traffic(self) -> bool {
        self.0 > 2
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseEnumError {
            kind: "level",
            value: value.to_string(),
        })
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty name attached to a submission by the contest platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Difficulty {
    /// `very easy`
    #[serde(rename = "very easy")]
    #[serde(alias = "very_easy")]
    #[ts(rename = "very easy")]
    VeryEasy,
    /// `easy`
    #[serde(rename = "easy")]
    Easy,
    /// `medium`
    #[serde(rename = "medium")]
    Medium,
    /// `hard`
    #[serde(rename = "hard")]
    Hard,
    /// `insane`
    #[serde(rename = "insane")]
    Insane,
}

impl Difficulty {
    /// The map level used to judge submissions of this difficulty.
    pub const fn level(self) -> Level {
        match self {
            Self::VeryEasy | Self::Easy => Level::BASIC,
            Self::Medium => Level::OBSTACLES,
            Self::Hard | Self::Insane => Level::TRAFFIC,
        }
    }

    /// The platform name of this difficulty.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Insane => "insane",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "very easy" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "insane" => Ok(Self::Insane),
            _ => Err(ParseEnumError {
                kind: "difficulty",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dataset size
// ---------------------------------------------------------------------------

/// Size class of a problem instance. Larger datasets are worth more points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum DatasetSize {
    /// Base value 100.
    Small,
    /// Base value 1 000.
    Medium,
    /// Base value 100 000.
    Big,
    /// Base value 1 000 000.
    Crazy,
}

impl DatasetSize {
    /// Points awarded before the movement penalty is applied.
    pub const fn base_points(self) -> f64 {
        match self {
            Self::Small => 100.0,
            Self::Medium => 1_000.0,
            Self::Big => 100_000.0,
            Self::Crazy => 1_000_000.0,
        }
    }
}

impl FromStr for DatasetSize {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "big" => Ok(Self::Big),
            "crazy" => Ok(Self::Crazy),
            _ => Err(ParseEnumError {
                kind: "dataset size",
                value: s.to_owned(),
            }),
        }
    }
}
