//! Shared type definitions for the contest judge.
//!
//! This crate holds the small value types used across the workspace: grid
//! geometry, difficulty tiers, dataset size classes, and the report payload
//! returned to the contest platform. Payload types are exported to
//! `TypeScript` via `ts-rs` for the platform frontend.
//!
//! # Modules
//!
//! - [`geometry`] -- Grid coordinates, map dimensions and move directions
//! - [`enums`] -- Difficulty names, levels and dataset size classes
//! - [`report`] -- Verdict payloads exchanged with the platform

pub mod enums;
pub mod geometry;
pub mod report;

// Re-export all public types at crate root for convenience.
pub use enums::{DatasetSize, Difficulty, Level, ParseEnumError};
pub use geometry::{Axis, Coord, Dimensions, Direction};
pub use report::{InstanceSummary, JudgeReport};
