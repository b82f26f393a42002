//! Pose evaluation result and the running score tally

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const NO_PERSON_MESSAGE: &str = "No person detected";
pub const ARMS_NOT_VISIBLE_MESSAGE: &str = "Arms not visible";

/// Outcome of evaluating one frame against an exercise rule.
///
/// `messages` are in check order, so the first one is the most important.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseCheckResult {
    pub correct: bool,
    /// 0-100
    pub score: f64,
    pub messages: Vec<String>,
    pub warnings: Vec<String>,
    /// Per-joint shakiness (0 = steady, 100 = shaky)
    pub stability: BTreeMap<String, f64>,
}

impl PoseCheckResult {
    /// Fixed failing result carrying a single message
    pub fn sentinel(message: &str) -> Self {
        Self {
            correct: false,
            score: 0.0,
            messages: vec![message.to_string()],
            warnings: Vec::new(),
            stability: BTreeMap::new(),
        }
    }

    pub fn no_person() -> Self {
        Self::sentinel(NO_PERSON_MESSAGE)
    }

    pub fn primary_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    pub fn has_warning(&self, warning: &str) -> bool {
        self.warnings.iter().any(|w| w == warning)
    }
}

/// Points earned over checks attempted. Checks whose angle was undefined
/// are never recorded, so they drop out of the denominator.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ScoreTally {
    earned: u32,
    attempted: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, passed: bool) {
        self.attempted += 1;
        if passed {
            self.earned += 1;
        }
    }

    /// Percentage in [0, 100]; 0 when nothing was attempted
    pub fn percent(&self) -> f64 {
        f64::from(self.earned) / f64::from(self.attempted.max(1)) * 100.0
    }
}
