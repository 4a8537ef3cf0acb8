//! Shared application state for the judge API.

use std::sync::Arc;

use judge_core::Judge;

/// State shared by every handler.
///
/// The judge is immutable once built, so handlers only ever clone the
/// [`Arc`] and never lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The judge with every map pre-loaded.
    pub judge: Arc<Judge>,
}

impl AppState {
    /// Wrap a ready judge.
    pub fn new(judge: Judge) -> Self {
        Self {
            judge: Arc::new(judge),
        }
    }
}
