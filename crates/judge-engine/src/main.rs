//! Judge server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `JUDGE_CONFIG` (default `judge-config.yaml`)
//! 2. Initialize structured logging (tracing) as configured
//! 3. Load every configured map
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use judge_core::config::LoggingConfig;
use judge_core::{Judge, JudgeConfig, LogFormat};
use judge_server::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "judge-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, a map file, or the server fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("judge-engine starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        static_dir = %config.static_dir.display(),
        max_movements = config.max_movements,
        instances = config.instances.len(),
        "Effective configuration"
    );

    // 3. Load maps.
    let judge = Judge::from_config(&config)?;

    // 4. Serve.
    start_server(&config.server, Arc::new(AppState::new(judge))).await?;

    info!("judge-engine stopped");
    Ok(())
}

/// Load configuration, falling back to defaults when the file is absent.
///
/// Returns the path that was read, if any, so it can be logged once tracing
/// is up.
fn load_config() -> Result<(JudgeConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var("JUDGE_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = JudgeConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        let mut config = JudgeConfig::default();
        config.apply_env_overrides();
        Ok((config, None))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
