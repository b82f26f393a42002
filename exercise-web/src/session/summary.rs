//! Per-exercise session statistics

use serde::{Deserialize, Serialize};

/// Append-only rep log for one exercise
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub total_reps: u32,
    pub correct_reps: u32,
    pub incorrect_reps: u32,
    posture_scores: Vec<f64>,
}

/// Snapshot handed to the dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub total_reps: u32,
    pub correct_reps: u32,
    pub incorrect_reps: u32,
    /// Rounded to 2 decimal places
    pub avg_posture_score: f64,
}

impl SessionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rep(&mut self, correct: bool, score: f64) {
        self.total_reps += 1;
        if correct {
            self.correct_reps += 1;
        } else {
            self.incorrect_reps += 1;
        }
        self.posture_scores.push(score);
    }

    /// Mean posture score, 0 with no reps
    pub fn average_score(&self) -> f64 {
        if self.posture_scores.is_empty() {
            return 0.0;
        }
        self.posture_scores.iter().sum::<f64>() / self.posture_scores.len() as f64
    }

    pub fn posture_scores(&self) -> &[f64] {
        &self.posture_scores
    }

    pub fn as_dict(&self) -> SummarySnapshot {
        SummarySnapshot {
            total_reps: self.total_reps,
            correct_reps: self.correct_reps,
            incorrect_reps: self.incorrect_reps,
            avg_posture_score: (self.average_score() * 100.0).round() / 100.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
