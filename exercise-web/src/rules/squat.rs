//! Squat form rule
//!
//! Knee angle (hip-knee-ankle) for depth, back angle (shoulder-hip-knee) for
//! posture. Joints are averaged across left/right so one occluded side does
//! not break evaluation.

use crate::kinematics::{
    joint_angle, LandmarkSet, StabilityTracker,
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
    RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};

use super::result::{PoseCheckResult, ScoreTally};
use super::thresholds::{
    Thresholds, BACK_MIN, DEFAULT_BACK_MIN, DEFAULT_KNEE_ANGLE_DEEP, DEFAULT_KNEE_ANGLE_HIGH,
    DEFAULT_KNEE_SAFE_MIN, KNEE_ANGLE_DEEP, KNEE_ANGLE_HIGH, KNEE_SAFE_MIN,
};
use super::FLAT_PASS_SCORE;

pub const MSG_GO_LOWER: &str = "Go Lower";
pub const MSG_KEEP_BACK_STRAIGHT: &str = "Keep Back Straight";
pub const WARN_KNEE_STRESS: &str = "Knee stress!";

/// Stability key for the knee angle
pub const KNEE_JOINT: &str = "knee";

/// "Go Lower" fires only this far above the depth target...
const GO_LOWER_MARGIN: f64 = 30.0;
/// ...and only below this angle (standing upright is not an attempt)
const STANDING_KNEE_ANGLE: f64 = 160.0;
/// Depth within this margin of the target still earns the point
const DEPTH_TOLERANCE: f64 = 10.0;

pub struct SquatRule {
    thresholds: Thresholds,
    stability: StabilityTracker,
}

impl SquatRule {
    pub fn new(thresholds: Thresholds, stability: StabilityTracker) -> Self {
        Self { thresholds, stability }
    }

    pub fn evaluate(&mut self, landmarks: Option<&LandmarkSet>) -> PoseCheckResult {
        let Some(lm) = landmarks else {
            return PoseCheckResult::no_person();
        };

        let shoulder = lm.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER);
        let hip = lm.midpoint(LEFT_HIP, RIGHT_HIP);
        let knee = lm.midpoint(LEFT_KNEE, RIGHT_KNEE);
        let ankle = lm.midpoint(LEFT_ANKLE, RIGHT_ANKLE);

        let knee_angle = joint_angle(hip, knee, ankle);
        let back_angle = joint_angle(shoulder, hip, knee);
        log::trace!("squat knee={:?} back={:?}", knee_angle, back_angle);

        self.stability.push(KNEE_JOINT, knee_angle);

        let mut messages = Vec::new();
        let mut warnings = Vec::new();
        let mut tally = ScoreTally::new();

        if let Some(knee_angle) = knee_angle {
            let target = self.thresholds.get_or(KNEE_ANGLE_DEEP, DEFAULT_KNEE_ANGLE_DEEP);

            if knee_angle > target + GO_LOWER_MARGIN && knee_angle < STANDING_KNEE_ANGLE {
                messages.push(MSG_GO_LOWER.to_string());
            }
            tally.record(knee_angle <= target + DEPTH_TOLERANCE);

            if knee_angle < self.thresholds.get_or(KNEE_SAFE_MIN, DEFAULT_KNEE_SAFE_MIN) {
                warnings.push(WARN_KNEE_STRESS.to_string());
            }
        }

        if let Some(back_angle) = back_angle {
            let straight = back_angle >= self.thresholds.get_or(BACK_MIN, DEFAULT_BACK_MIN);
            tally.record(straight);
            if !straight {
                messages.push(MSG_KEEP_BACK_STRAIGHT.to_string());
            }
        }

        let score = tally.percent();
        PoseCheckResult {
            correct: score > FLAT_PASS_SCORE,
            score,
            messages,
            warnings,
            stability: self.stability.scores(),
        }
    }

    /// Rep signal: left hip-knee-ankle
    pub fn primary_angle(&self, lm: &LandmarkSet) -> Option<f64> {
        joint_angle(lm.point(LEFT_HIP), lm.point(LEFT_KNEE), lm.point(LEFT_ANKLE))
    }

    /// (enter peak, exit peak)
    pub fn rep_thresholds(&self) -> (f64, f64) {
        (
            self.thresholds.get_or(KNEE_ANGLE_DEEP, DEFAULT_KNEE_ANGLE_DEEP),
            self.thresholds.get_or(KNEE_ANGLE_HIGH, DEFAULT_KNEE_ANGLE_HIGH),
        )
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn stability(&self) -> &StabilityTracker {
        &self.stability
    }
}
