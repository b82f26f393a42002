//! Session context - owns all per-exercise state for one user session
//!
//! One evaluation cycle per frame: rule evaluation (angles + stability),
//! rep counter update on the primary angle, summary update on a completed
//! rep, then display feedback. Switching exercise or difficulty never
//! discards counters or summaries; only `reset_stats` does.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::kinematics::{LandmarkSet, StabilityTracker};
use crate::rules::{
    DifficultyMode, Exercise, ExerciseRule, PoseCheckResult, ThresholdCatalog, Thresholds,
};

use super::feedback::{derive_feedback, Feedback};
use super::rep_counter::{RepCounter, RepPhase};
use super::summary::{SessionSummary, SummarySnapshot};

/// Everything produced by one evaluation cycle
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub exercise: Exercise,
    pub mode: DifficultyMode,
    pub result: PoseCheckResult,
    pub primary_angle: Option<f64>,
    pub rep_completed: bool,
    pub phase: RepPhase,
    pub summary: SummarySnapshot,
    pub feedback: Feedback,
}

pub struct SessionContext {
    exercise: Exercise,
    mode: DifficultyMode,
    catalog: ThresholdCatalog,
    stability_window: usize,
    // Indexed by Exercise::index()
    rules: [ExerciseRule; 3],
    counters: [RepCounter; 3],
    summaries: [SessionSummary; 3],
}

impl SessionContext {
    pub fn new(config: EngineConfig) -> Self {
        let rules = Self::build_rules(&config.thresholds, config.mode, config.stability_window);
        Self {
            exercise: config.exercise,
            mode: config.mode,
            catalog: config.thresholds,
            stability_window: config.stability_window,
            rules,
            counters: Default::default(),
            summaries: Default::default(),
        }
    }

    fn build_rules(
        catalog: &ThresholdCatalog,
        mode: DifficultyMode,
        stability_window: usize,
    ) -> [ExerciseRule; 3] {
        Exercise::ALL.map(|exercise| {
            ExerciseRule::new(
                exercise,
                catalog.resolve(exercise, mode),
                StabilityTracker::with_window(stability_window),
            )
        })
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn set_exercise(&mut self, exercise: Exercise) {
        if exercise != self.exercise {
            log::info!("exercise switched: {} -> {}", self.exercise, exercise);
            self.exercise = exercise;
        }
    }

    /// Rebuild every rule with thresholds for the new mode. Counters and
    /// summaries carry over.
    pub fn set_mode(&mut self, mode: DifficultyMode) {
        log::info!("difficulty mode: {} -> {}", self.mode, mode);
        self.rules = Self::build_rules(&self.catalog, mode, self.stability_window);
        self.mode = mode;
    }

    /// Fresh counter and summary for one exercise
    pub fn reset_stats(&mut self, exercise: Exercise) {
        log::info!("stats reset for {}", exercise);
        self.counters[exercise.index()].reset();
        self.summaries[exercise.index()].reset();
    }

    pub fn rule(&self, exercise: Exercise) -> &ExerciseRule {
        &self.rules[exercise.index()]
    }

    pub fn thresholds(&self, exercise: Exercise) -> &Thresholds {
        self.rule(exercise).thresholds()
    }

    pub fn counter(&self, exercise: Exercise) -> &RepCounter {
        &self.counters[exercise.index()]
    }

    pub fn summary(&self, exercise: Exercise) -> &SessionSummary {
        &self.summaries[exercise.index()]
    }

    /// Run one evaluation cycle for the active exercise
    pub fn tick(&mut self, landmarks: Option<&LandmarkSet>) -> FrameReport {
        let idx = self.exercise.index();
        let rule = &mut self.rules[idx];

        let result = rule.evaluate(landmarks);
        let primary_angle = landmarks.and_then(|lm| rule.primary_angle(lm));

        let mut rep_completed = false;
        if let Some(angle) = primary_angle {
            let (enter, exit) = rule.rep_thresholds();
            rep_completed = self.counters[idx].process(angle, enter, exit);
        }

        let summary = &mut self.summaries[idx];
        if rep_completed {
            summary.push_rep(result.correct, result.score);
            log::info!(
                "{} rep #{} completed (score {:.0}, correct {})",
                self.exercise,
                summary.total_reps,
                result.score,
                result.correct
            );
        }

        let feedback = derive_feedback(self.exercise, &result, primary_angle, summary.total_reps);

        FrameReport {
            exercise: self.exercise,
            mode: self.mode,
            primary_angle,
            rep_completed,
            phase: self.counters[idx].phase(),
            summary: summary.as_dict(),
            feedback,
            result,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
