//! Bicep curl form rule
//!
//! Both arms are measured independently; the more flexed one is the active
//! arm. Flexion and extension are checked against the same instantaneous
//! angle, so a single frame can satisfy at most one of them.

use crate::kinematics::{
    joint_angle, LandmarkSet, StabilityTracker,
    LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

use super::result::{PoseCheckResult, ScoreTally, ARMS_NOT_VISIBLE_MESSAGE};
use super::thresholds::{
    Thresholds, CURL_EXTENSION_THRESH, CURL_FLEXION_THRESH, DEFAULT_CURL_ELBOW_SAFE_MIN,
    DEFAULT_CURL_EXTENSION, DEFAULT_CURL_FLEXION, DEFAULT_PASS_SCORE, ELBOW_SAFE_MIN, PASS_SCORE,
};

pub const MSG_CURL_HIGHER: &str = "Curl higher";
pub const MSG_FULLY_EXTEND: &str = "Fully extend arm";
pub const WARN_ELBOW_STRESS: &str = "Elbow stress!";

pub const ELBOW_JOINT: &str = "elbow";

pub struct BicepCurlRule {
    thresholds: Thresholds,
    stability: StabilityTracker,
}

impl BicepCurlRule {
    pub fn new(thresholds: Thresholds, stability: StabilityTracker) -> Self {
        Self { thresholds, stability }
    }

    pub fn evaluate(&mut self, landmarks: Option<&LandmarkSet>) -> PoseCheckResult {
        let Some(lm) = landmarks else {
            return PoseCheckResult::no_person();
        };

        let Some(active) = Self::active_arm_angle(lm) else {
            return PoseCheckResult::sentinel(ARMS_NOT_VISIBLE_MESSAGE);
        };
        log::trace!("curl active elbow={:.1}", active);

        self.stability.push(ELBOW_JOINT, Some(active));

        let mut messages = Vec::new();
        let mut warnings = Vec::new();
        let mut tally = ScoreTally::new();

        // Curl depth
        let flexed = active <= self.thresholds.get_or(CURL_FLEXION_THRESH, DEFAULT_CURL_FLEXION);
        tally.record(flexed);
        if !flexed {
            messages.push(MSG_CURL_HIGHER.to_string());
        }

        // Extension (no half reps)
        let extended =
            active >= self.thresholds.get_or(CURL_EXTENSION_THRESH, DEFAULT_CURL_EXTENSION);
        tally.record(extended);
        if !extended {
            messages.push(MSG_FULLY_EXTEND.to_string());
        }

        if active < self.thresholds.get_or(ELBOW_SAFE_MIN, DEFAULT_CURL_ELBOW_SAFE_MIN) {
            warnings.push(WARN_ELBOW_STRESS.to_string());
        }

        let score = tally.percent();
        PoseCheckResult {
            correct: score >= self.thresholds.get_or(PASS_SCORE, DEFAULT_PASS_SCORE),
            score,
            messages,
            warnings,
            stability: self.stability.scores(),
        }
    }

    /// Smaller of the two elbow angles, or whichever one is defined
    pub fn active_arm_angle(lm: &LandmarkSet) -> Option<f64> {
        let left = joint_angle(lm.point(LEFT_SHOULDER), lm.point(LEFT_ELBOW), lm.point(LEFT_WRIST));
        let right =
            joint_angle(lm.point(RIGHT_SHOULDER), lm.point(RIGHT_ELBOW), lm.point(RIGHT_WRIST));

        match (left, right) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(angle), None) | (None, Some(angle)) => Some(angle),
            (None, None) => None,
        }
    }

    /// Rep signal: the active arm
    pub fn primary_angle(&self, lm: &LandmarkSet) -> Option<f64> {
        Self::active_arm_angle(lm)
    }

    pub fn rep_thresholds(&self) -> (f64, f64) {
        (
            self.thresholds.get_or(CURL_FLEXION_THRESH, DEFAULT_CURL_FLEXION),
            self.thresholds.get_or(CURL_EXTENSION_THRESH, DEFAULT_CURL_EXTENSION),
        )
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn stability(&self) -> &StabilityTracker {
        &self.stability
    }
}
