//! Route validation, scoring and the judge facade for the drone-delivery
//! challenge.
//!
//! # Modules
//!
//! - [`config`] -- `judge-config.yaml` loading with environment overrides.
//! - [`error`] -- [`ValidationError`] (the closed set of rejection reasons)
//!   and [`JudgeError`].
//! - [`judge`] -- [`Judge`]: pre-loaded maps per instance and level,
//!   `validate_and_score`.
//! - [`score`] -- Points for a valid submission.
//! - [`submission`] -- Contestant output file parsing.
//! - [`validator`] -- Replays every route and checks the cross-route rules.

pub mod config;
pub mod error;
pub mod judge;
pub mod score;
pub mod submission;
pub mod validator;

pub use config::{ConfigError, JudgeConfig, LogFormat};
pub use error::{JudgeError, ValidationError};
pub use judge::Judge;
pub use score::score;
pub use validator::{DEFAULT_MAX_MOVEMENTS, ValidationOutcome, check, validate};
