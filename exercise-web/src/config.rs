//! Engine configuration
//!
//! Every field has a default, so JS can pass `{}` or any subset, e.g.
//! `{ mode: "advanced", thresholds: { base: { squat: { back_min: 150 } } } }`.
//! Threshold overrides are layered key by key over the built-in catalog, so
//! the example above changes `back_min` only and keeps the mode deltas.

use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;
use crate::kinematics::{StabilityTracker, DEFAULT_WINDOW};
use crate::rules::{DifficultyMode, Exercise, ExerciseRule, ThresholdCatalog};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Exercise selected at start
    pub exercise: Exercise,
    /// Difficulty mode selected at start
    pub mode: DifficultyMode,
    /// Samples kept per joint for stability scoring
    pub stability_window: usize,
    pub thresholds: ThresholdCatalog,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exercise: Exercise::default(),
            mode: DifficultyMode::default(),
            stability_window: DEFAULT_WINDOW,
            thresholds: ThresholdCatalog::default(),
        }
    }
}

impl EngineConfig {
    /// Reject configurations the evaluation loop cannot run sanely
    pub fn validate(&self) -> Result<(), ExerciseError> {
        if self.stability_window == 0 {
            return Err(ExerciseError::Config("stability_window must be at least 1".into()));
        }

        for mode in [DifficultyMode::Beginner, DifficultyMode::Advanced] {
            for exercise in Exercise::ALL {
                let thresholds = self.thresholds.resolve(exercise, mode);
                if let Some((key, value)) = thresholds.iter().find(|(_, v)| !v.is_finite()) {
                    return Err(ExerciseError::Config(format!(
                        "{exercise}/{mode}: threshold {key} is not finite ({value})"
                    )));
                }

                if let Some(key) = self.thresholds.orphan_delta(exercise, mode) {
                    return Err(ExerciseError::Config(format!(
                        "{exercise}/{mode}: delta for {key} has no base threshold"
                    )));
                }

                // Rep counting needs a hysteresis band
                let rule = ExerciseRule::new(exercise, thresholds, StabilityTracker::new());
                let (enter, exit) = rule.rep_thresholds();
                if enter >= exit {
                    return Err(ExerciseError::Config(format!(
                        "{exercise}/{mode}: rep enter threshold {enter} \
                         must be below exit threshold {exit}"
                    )));
                }
            }
        }

        Ok(())
    }
}
