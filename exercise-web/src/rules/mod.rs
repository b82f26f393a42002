//! Rules module - per-exercise form checks and threshold configuration
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod thresholds;
mod result;
mod squat;
mod pushup;
mod bicep_curl;
mod engine;

pub use exercise::{Exercise, DifficultyMode};
pub use thresholds::{Thresholds, ThresholdCatalog, ThresholdOverrides, merge_thresholds};
pub use result::{PoseCheckResult, NO_PERSON_MESSAGE, ARMS_NOT_VISIBLE_MESSAGE};
pub use squat::SquatRule;
pub use pushup::PushupRule;
pub use bicep_curl::BicepCurlRule;
pub use engine::ExerciseRule;

/// Threshold names and their fallback values
pub mod keys {
    pub use super::thresholds::{
        KNEE_ANGLE_DEEP, KNEE_ANGLE_HIGH, KNEE_SAFE_MIN, HIP_MIN, BACK_MIN,
        ELBOW_TARGET, ELBOW_RESET, BODY_MIN,
        CURL_FLEXION_THRESH, CURL_EXTENSION_THRESH,
        ELBOW_SAFE_MIN, PASS_SCORE,
    };
}

/// Feedback strings, for callers that filter or restyle them
pub mod messages {
    pub use super::squat::{MSG_GO_LOWER, MSG_KEEP_BACK_STRAIGHT, WARN_KNEE_STRESS};
    pub use super::pushup::MSG_FIX_HIP_SAG;
    pub use super::bicep_curl::{MSG_CURL_HIGHER, MSG_FULLY_EXTEND, WARN_ELBOW_STRESS};
}

/// Squat and push-up pass when the score is strictly above this
pub(crate) const FLAT_PASS_SCORE: f64 = 60.0;
