//! Map descriptions and the grid step simulator for the drone-delivery
//! challenge.
//!
//! # Modules
//!
//! - [`error`] -- Format, move and load errors. Move error messages are the
//!   exact text shown to contestants.
//! - [`map`] -- [`MapDescription`]: dimensions, delivery points, walls,
//!   tunnels and other drones, parsed from a line-oriented file.
//! - [`moves`] -- Run-length move string tokenizer.
//! - [`trajectory`] -- Positions of the other drones as pure functions of
//!   the tick.
//! - [`simulator`] -- [`GridSimulator`]: one elementary move at a time with
//!   bounds, wall, tunnel and collision checks.

pub mod error;
pub mod map;
pub mod moves;
pub mod simulator;
pub mod trajectory;

pub use error::{FormatError, LoadError, MoveError};
pub use map::{DeliveryPoint, MapDescription, parse_coord, parse_int};
pub use moves::{MoveToken, parse_moves};
pub use simulator::{GridSimulator, Replay, advance};
pub use trajectory::{AffineExpr, CyclicPath, Trajectory};
