//! Display feedback policy
//!
//! Turns a raw evaluation into what the dashboard should show. Works on
//! copies only: the rule result, counters and summaries are never touched.

use serde::Serialize;

use crate::rules::{Exercise, PoseCheckResult};

/// Scores above this are not shown while a correction message is active
const CONFLICT_SCORE: f64 = 90.0;
/// Score shown instead when a message conflicts with a near-perfect score
const CONFLICT_DISPLAY_SCORE: f64 = 75.0;
/// Below this an active rep without messages gets a gentle nudge
const STEADY_SCORE: f64 = 80.0;
/// Primary angle assumed when it could not be measured (fully extended)
const UNKNOWN_ANGLE: f64 = 180.0;

pub const HINT_FIRST_REP: &str = "Perform your first rep to start tracking";
pub const HINT_GO_DEEPER: &str = "Go deeper to trigger count";
pub const HINT_RESETTING: &str = "Resetting for next rep...";
pub const HINT_KEEP_STEADY: &str = "Keep form steady";
pub const HINT_PERFECT: &str = "Perfect Form!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    /// No reps counted yet
    Ready,
    /// Between reps, fully extended
    Resting,
    /// Mid-rep
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    Info,
    Warning,
    Success,
}

/// What the dashboard renders for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feedback {
    pub status: FeedbackStatus,
    pub tone: FeedbackTone,
    pub text: String,
    /// Score to display (0-100)
    pub display_score: f64,
    pub idle: bool,
}

/// Angle above which the user counts as idle for an exercise
pub fn idle_angle(exercise: Exercise) -> f64 {
    match exercise {
        Exercise::BicepCurl => 155.0,
        Exercise::Squat | Exercise::Pushup => 165.0,
    }
}

/// Score to show for a result: a correction message caps a near-perfect score
pub fn display_score(result: &PoseCheckResult) -> f64 {
    if !result.messages.is_empty() && result.score > CONFLICT_SCORE {
        CONFLICT_DISPLAY_SCORE
    } else {
        result.score
    }
}

/// Build the feedback for one frame
pub fn derive_feedback(
    exercise: Exercise,
    result: &PoseCheckResult,
    primary_angle: Option<f64>,
    total_reps: u32,
) -> Feedback {
    let angle = primary_angle.unwrap_or(UNKNOWN_ANGLE);
    let idle = angle > idle_angle(exercise);
    let score = display_score(result);

    if total_reps == 0 {
        let text = if idle { HINT_FIRST_REP } else { HINT_GO_DEEPER };
        return Feedback {
            status: FeedbackStatus::Ready,
            tone: FeedbackTone::Info,
            text: text.to_string(),
            display_score: 0.0,
            idle,
        };
    }

    if idle {
        return Feedback {
            status: FeedbackStatus::Resting,
            tone: FeedbackTone::Info,
            text: HINT_RESETTING.to_string(),
            display_score: 0.0,
            idle,
        };
    }

    let (tone, text) = match result.primary_message() {
        Some(message) => (FeedbackTone::Warning, message),
        None if score < STEADY_SCORE => (FeedbackTone::Info, HINT_KEEP_STEADY),
        None => (FeedbackTone::Success, HINT_PERFECT),
    };

    Feedback {
        status: FeedbackStatus::Active,
        tone,
        text: text.to_string(),
        display_score: score,
        idle,
    }
}
