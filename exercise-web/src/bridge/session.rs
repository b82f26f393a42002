//! Exercise session exposed to JavaScript
//!
//! The dashboard owns one `ExerciseSession`, feeds it a landmark buffer per
//! video frame and renders the returned report. No thread-local state: the
//! session object is the only owner.

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::ExerciseError;
use crate::kinematics::LandmarkSet;
use crate::rules::{DifficultyMode, Exercise};
use crate::session::{FrameReport, SessionContext};

use super::convert::to_js;

#[wasm_bindgen]
pub struct ExerciseSession {
    ctx: SessionContext,
}

#[wasm_bindgen]
impl ExerciseSession {
    /// Session with built-in thresholds (squat, beginner)
    #[wasm_bindgen(constructor)]
    pub fn new() -> ExerciseSession {
        Self::from_config(EngineConfig::default())
    }

    /// Session from a JS config object; every field is optional
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ExerciseSession, JsValue> {
        let config: EngineConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| ExerciseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(Self::from_config(config))
    }

    #[wasm_bindgen(js_name = setExercise)]
    pub fn set_exercise(&mut self, name: &str) -> Result<(), JsValue> {
        let exercise: Exercise = name.parse()?;
        self.ctx.set_exercise(exercise);
        Ok(())
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode: DifficultyMode = name.parse()?;
        self.ctx.set_mode(mode);
        Ok(())
    }

    /// Flip between beginner and advanced, returns the new mode name
    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&mut self) -> String {
        let mode = self.ctx.mode().toggled();
        self.ctx.set_mode(mode);
        mode.as_str().to_string()
    }

    /// Clear reps and scores for the active exercise
    #[wasm_bindgen(js_name = resetStats)]
    pub fn reset_stats(&mut self) {
        let exercise = self.ctx.exercise();
        self.ctx.reset_stats(exercise);
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.ctx.exercise().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.ctx.mode().as_str().to_string()
    }

    /// Evaluate one frame.
    ///
    /// `data` is a flat Float32Array of 132 values (33 landmarks × x, y, z,
    /// visibility) in pixel coordinates, or `null` when no person was found.
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, data: Option<Vec<f32>>) -> Result<JsValue, JsValue> {
        match self.process(data.as_deref()) {
            Ok(report) => to_js(&report),
            Err(err) => {
                web_sys::console::warn_1(&err.to_string().into());
                Err(err.into())
            }
        }
    }

    /// `{ total_reps, correct_reps, incorrect_reps, avg_posture_score }` for
    /// the active exercise
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.ctx.summary(self.ctx.exercise()).as_dict())
    }

    /// Effective thresholds of the active exercise under the current mode.
    ///
    /// Only the bicep curl reads `pass_score`. Squat and push-up pass when
    /// the score is above 60; their `pass_score` entries are informational.
    pub fn thresholds(&self) -> Result<JsValue, JsValue> {
        to_js(self.ctx.thresholds(self.ctx.exercise()))
    }
}

impl ExerciseSession {
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            ctx: SessionContext::new(config),
        }
    }

    /// Native entry point behind `processFrame`
    pub fn process(&mut self, data: Option<&[f32]>) -> Result<FrameReport, ExerciseError> {
        let landmarks = data.map(LandmarkSet::from_flat).transpose()?;
        Ok(self.ctx.tick(landmarks.as_ref()))
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.ctx
    }
}

impl Default for ExerciseSession {
    fn default() -> Self {
        Self::new()
    }
}
