//! Error types for the judge binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode during startup and serving.

/// Top-level error for the judge binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: judge_core::ConfigError,
    },

    /// A map file could not be loaded.
    #[error("map error: {source}")]
    Map {
        /// The underlying load error.
        #[from]
        source: judge_grid::LoadError,
    },

    /// The HTTP server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: judge_server::ServerError,
    },
}
