//! Exercise rule dispatch
//!
//! The set of exercises is closed, so rules are an enum selected when the
//! threshold configuration is built rather than trait objects.

use crate::kinematics::{LandmarkSet, StabilityTracker};

use super::bicep_curl::BicepCurlRule;
use super::exercise::Exercise;
use super::pushup::PushupRule;
use super::result::PoseCheckResult;
use super::squat::SquatRule;
use super::thresholds::Thresholds;

pub enum ExerciseRule {
    Squat(SquatRule),
    Pushup(PushupRule),
    BicepCurl(BicepCurlRule),
}

impl ExerciseRule {
    pub fn new(exercise: Exercise, thresholds: Thresholds, stability: StabilityTracker) -> Self {
        match exercise {
            Exercise::Squat => ExerciseRule::Squat(SquatRule::new(thresholds, stability)),
            Exercise::Pushup => ExerciseRule::Pushup(PushupRule::new(thresholds, stability)),
            Exercise::BicepCurl => {
                ExerciseRule::BicepCurl(BicepCurlRule::new(thresholds, stability))
            }
        }
    }

    pub fn exercise(&self) -> Exercise {
        match self {
            ExerciseRule::Squat(_) => Exercise::Squat,
            ExerciseRule::Pushup(_) => Exercise::Pushup,
            ExerciseRule::BicepCurl(_) => Exercise::BicepCurl,
        }
    }

    /// Score one frame. `None` means no person was detected.
    pub fn evaluate(&mut self, landmarks: Option<&LandmarkSet>) -> PoseCheckResult {
        match self {
            ExerciseRule::Squat(rule) => rule.evaluate(landmarks),
            ExerciseRule::Pushup(rule) => rule.evaluate(landmarks),
            ExerciseRule::BicepCurl(rule) => rule.evaluate(landmarks),
        }
    }

    /// The single angle that drives rep counting for this exercise
    pub fn primary_angle(&self, landmarks: &LandmarkSet) -> Option<f64> {
        match self {
            ExerciseRule::Squat(rule) => rule.primary_angle(landmarks),
            ExerciseRule::Pushup(rule) => rule.primary_angle(landmarks),
            ExerciseRule::BicepCurl(rule) => rule.primary_angle(landmarks),
        }
    }

    /// (enter peak, exit peak) thresholds for the rep counter
    pub fn rep_thresholds(&self) -> (f64, f64) {
        match self {
            ExerciseRule::Squat(rule) => rule.rep_thresholds(),
            ExerciseRule::Pushup(rule) => rule.rep_thresholds(),
            ExerciseRule::BicepCurl(rule) => rule.rep_thresholds(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        match self {
            ExerciseRule::Squat(rule) => rule.thresholds(),
            ExerciseRule::Pushup(rule) => rule.thresholds(),
            ExerciseRule::BicepCurl(rule) => rule.thresholds(),
        }
    }

    pub fn stability(&self) -> &StabilityTracker {
        match self {
            ExerciseRule::Squat(rule) => rule.stability(),
            ExerciseRule::Pushup(rule) => rule.stability(),
            ExerciseRule::BicepCurl(rule) => rule.stability(),
        }
    }
}
