//! Boundary errors
//!
//! The evaluation core never fails: bad geometry and missing people are
//! ordinary values. These errors only come from input crossing the JS
//! boundary (names, buffers, configuration objects).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExerciseError {
    #[error("unknown exercise '{0}' (expected squat, pushup or bicep_curl)")]
    UnknownExercise(String),

    #[error("unknown difficulty mode '{0}' (expected beginner or advanced)")]
    UnknownMode(String),

    #[error("invalid landmark data length: {len} (expected {expected})")]
    InvalidLandmarkBuffer { len: usize, expected: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<ExerciseError> for JsValue {
    fn from(err: ExerciseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
