//! Exercise and difficulty identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

/// Supported exercises
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    #[default]
    Squat,
    Pushup,
    BicepCurl,
}

impl Exercise {
    pub const ALL: [Exercise; 3] = [Exercise::Squat, Exercise::Pushup, Exercise::BicepCurl];

    /// Position in [`Exercise::ALL`], for per-exercise arrays
    pub fn index(&self) -> usize {
        match self {
            Exercise::Squat => 0,
            Exercise::Pushup => 1,
            Exercise::BicepCurl => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Pushup => "pushup",
            Exercise::BicepCurl => "bicep_curl",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Exercise::Squat),
            "pushup" | "push-up" | "push_up" => Ok(Exercise::Pushup),
            "bicep_curl" | "bicep-curl" | "curl" => Ok(Exercise::BicepCurl),
            _ => Err(ExerciseError::UnknownExercise(s.to_string())),
        }
    }
}

/// Difficulty profile applied on top of the base thresholds
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyMode {
    #[default]
    Beginner,
    Advanced,
}

impl DifficultyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyMode::Beginner => "beginner",
            DifficultyMode::Advanced => "advanced",
        }
    }

    /// The other mode (the dashboard toggles between the two)
    pub fn toggled(&self) -> Self {
        match self {
            DifficultyMode::Beginner => DifficultyMode::Advanced,
            DifficultyMode::Advanced => DifficultyMode::Beginner,
        }
    }
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyMode {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(DifficultyMode::Beginner),
            "advanced" => Ok(DifficultyMode::Advanced),
            _ => Err(ExerciseError::UnknownMode(s.to_string())),
        }
    }
}
