//! The judging facade used by the contest platform.
//!
//! A [`Judge`] owns every configured map, loaded once at startup and shared
//! read-only through [`Arc`]. Judging a submission never mutates it, so one
//! `Judge` serves any number of concurrent requests without locking. Each
//! submission may replay at most the judge's movement limit.

use std::collections::BTreeMap;
use std::sync::Arc;

use judge_grid::{LoadError, MapDescription};
use judge_types::{DatasetSize, Difficulty, InstanceSummary, JudgeReport, Level};
use tracing::info;

use crate::config::JudgeConfig;
use crate::error::JudgeError;
use crate::score::score;
use crate::validator::{self, DEFAULT_MAX_MOVEMENTS};

/// Maps of one problem instance, keyed by level.
#[derive(Debug, Clone)]
struct Instance {
    dataset: DatasetSize,
    maps: BTreeMap<Level, Arc<MapDescription>>,
}

/// Validates and scores submissions for the configured instances.
#[derive(Debug, Clone)]
pub struct Judge {
    instances: BTreeMap<String, Instance>,
    max_movements: u64,
}

impl Default for Judge {
    fn default() -> Self {
        Self {
            instances: BTreeMap::new(),
            max_movements: DEFAULT_MAX_MOVEMENTS,
        }
    }
}

impl Judge {
    /// Load every map named in `config`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] hit while reading a map.
    pub fn from_config(config: &JudgeConfig) -> Result<Self, LoadError> {
        let mut judge = Self::default().with_max_movements(config.max_movements);
        for (name, instance) in &config.instances {
            for (level, path) in &instance.maps {
                let path = config.resolve_map_path(path);
                let map = MapDescription::load(&path, *level)?;
                judge.add_map(name, instance.dataset, map);
            }
        }
        info!(
            instances = judge.instances.len(),
            max_movements = judge.max_movements,
            "Judge ready"
        );
        Ok(judge)
    }

    /// Replace the per-submission movement limit.
    #[must_use]
    pub const fn with_max_movements(mut self, max_movements: u64) -> Self {
        self.max_movements = max_movements;
        self
    }

    /// Register a map under `instance`. The map's own level decides which
    /// difficulties it serves; a later map for the same level replaces the
    /// earlier one, and the last dataset class given wins.
    pub fn add_map(&mut self, instance: &str, dataset: DatasetSize, map: MapDescription) {
        let entry = self
            .instances
            .entry(instance.to_owned())
            .or_insert_with(|| Instance {
                dataset,
                maps: BTreeMap::new(),
            });
        entry.dataset = dataset;
        entry.maps.insert(map.level(), Arc::new(map));
    }

    /// Configured instances in name order.
    pub fn instances(&self) -> Vec<InstanceSummary> {
        self.instances
            .iter()
            .map(|(name, instance)| InstanceSummary {
                name: name.clone(),
                dataset: instance.dataset,
                levels: instance.maps.keys().copied().collect(),
            })
            .collect()
    }

    /// The map that judges `difficulty` on `instance`, with the instance's
    /// dataset class.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::UnknownInstance`] or
    /// [`JudgeError::LevelNotConfigured`].
    pub fn map(
        &self,
        instance: &str,
        difficulty: Difficulty,
    ) -> Result<(Arc<MapDescription>, DatasetSize), JudgeError> {
        let entry = self
            .instances
            .get(instance)
            .ok_or_else(|| JudgeError::UnknownInstance {
                instance: instance.to_owned(),
            })?;
        let map = entry
            .maps
            .get(&difficulty.level())
            .cloned()
            .ok_or_else(|| JudgeError::LevelNotConfigured {
                instance: instance.to_owned(),
                difficulty,
            })?;
        Ok((map, entry.dataset))
    }

    /// Validate `submission` for `instance` at `difficulty` and score it.
    ///
    /// A rejected submission is still an `Ok` report: `success` is false,
    /// `error` holds the reason and `points` is zero. A valid submission
    /// with zero movements is accepted with zero points.
    ///
    /// # Errors
    ///
    /// Returns a [`JudgeError`] when the instance or difficulty is not
    /// configured.
    pub fn validate_and_score(
        &self,
        instance: &str,
        difficulty: Difficulty,
        submission: &str,
    ) -> Result<JudgeReport, JudgeError> {
        let (map, dataset) = self.map(instance, difficulty)?;

        let report = match validator::check(&map, submission, self.max_movements) {
            Ok(total_movements) => {
                let points = score(total_movements, dataset, map.level()).unwrap_or(0.0);
                info!(
                    instance,
                    %difficulty,
                    total_movements,
                    points,
                    "Submission accepted"
                );
                JudgeReport::accepted(points)
            }
            Err(reason) => {
                info!(instance, %difficulty, %reason, "Submission rejected");
                JudgeReport::rejected(reason.to_string())
            }
        };
        Ok(report)
    }
}
