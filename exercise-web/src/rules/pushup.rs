//! Push-up form rule
//!
//! Elbow angle (shoulder-elbow-wrist) for depth, body line
//! (shoulder-hip-ankle) for hip sag.

use crate::kinematics::{
    joint_angle, LandmarkSet, StabilityTracker,
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

use super::result::{PoseCheckResult, ScoreTally};
use super::thresholds::{
    Thresholds, BODY_MIN, DEFAULT_BODY_MIN, DEFAULT_ELBOW_RESET, DEFAULT_ELBOW_TARGET,
    ELBOW_RESET, ELBOW_TARGET,
};
use super::FLAT_PASS_SCORE;

pub const MSG_GO_LOWER: &str = "Go Lower";
pub const MSG_FIX_HIP_SAG: &str = "Fix Hip Sag";

pub const ELBOW_JOINT: &str = "elbow";

/// At or above this the arms are straight and the user is not attempting a rep
const ARMS_STRAIGHT_ANGLE: f64 = 150.0;

pub struct PushupRule {
    thresholds: Thresholds,
    stability: StabilityTracker,
}

impl PushupRule {
    pub fn new(thresholds: Thresholds, stability: StabilityTracker) -> Self {
        Self { thresholds, stability }
    }

    pub fn evaluate(&mut self, landmarks: Option<&LandmarkSet>) -> PoseCheckResult {
        let Some(lm) = landmarks else {
            return PoseCheckResult::no_person();
        };

        let shoulder = lm.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER);
        let elbow = lm.midpoint(LEFT_ELBOW, RIGHT_ELBOW);
        let wrist = lm.midpoint(LEFT_WRIST, RIGHT_WRIST);
        let hip = lm.midpoint(LEFT_HIP, RIGHT_HIP);
        let ankle = lm.midpoint(LEFT_ANKLE, RIGHT_ANKLE);

        let elbow_angle = joint_angle(shoulder, elbow, wrist);
        let body_angle = joint_angle(shoulder, hip, ankle);
        log::trace!("pushup elbow={:?} body={:?}", elbow_angle, body_angle);

        self.stability.push(ELBOW_JOINT, elbow_angle);

        let mut messages = Vec::new();
        let mut tally = ScoreTally::new();

        if let Some(elbow_angle) = elbow_angle {
            let target = self.thresholds.get_or(ELBOW_TARGET, DEFAULT_ELBOW_TARGET);
            let deep_enough = elbow_angle <= target;
            tally.record(deep_enough);
            if !deep_enough && elbow_angle < ARMS_STRAIGHT_ANGLE {
                messages.push(MSG_GO_LOWER.to_string());
            }
        }

        if let Some(body_angle) = body_angle {
            let straight = body_angle >= self.thresholds.get_or(BODY_MIN, DEFAULT_BODY_MIN);
            tally.record(straight);
            if !straight {
                messages.push(MSG_FIX_HIP_SAG.to_string());
            }
        }

        let score = tally.percent();
        PoseCheckResult {
            correct: score > FLAT_PASS_SCORE,
            score,
            messages,
            warnings: Vec::new(),
            stability: self.stability.scores(),
        }
    }

    /// Rep signal: left shoulder-elbow-wrist
    pub fn primary_angle(&self, lm: &LandmarkSet) -> Option<f64> {
        joint_angle(lm.point(LEFT_SHOULDER), lm.point(LEFT_ELBOW), lm.point(LEFT_WRIST))
    }

    pub fn rep_thresholds(&self) -> (f64, f64) {
        (
            self.thresholds.get_or(ELBOW_TARGET, DEFAULT_ELBOW_TARGET),
            self.thresholds.get_or(ELBOW_RESET, DEFAULT_ELBOW_RESET),
        )
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn stability(&self) -> &StabilityTracker {
        &self.stability
    }
}
