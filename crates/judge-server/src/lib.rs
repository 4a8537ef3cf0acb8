//! HTTP API for the contest judge.
//!
//! A thin Axum layer over [`judge_core::Judge`]:
//!
//! - **`GET /health`** returns the current timestamp.
//! - **`GET /api/instances`** lists configured instances.
//! - **`POST /validator/{instance}`** takes `{"difficulty", "content"}` and
//!   returns a [`JudgeReport`](judge_types::JudgeReport).
//!
//! Validation is synchronous and runs on Tokio's blocking pool. The judge is
//! shared read-only through [`AppState`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
