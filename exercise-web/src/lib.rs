//! Exercise Web - rep counting and form scoring from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The pose estimator runs in JavaScript; this crate receives its 33
//! landmarks per frame and returns rep counts, form scores and feedback.
//!
//! ```javascript
//! import init, { ExerciseSession, initLogging } from './exercise_web.js';
//!
//! await init();
//! initLogging('info');
//! const session = new ExerciseSession();
//! session.setExercise('bicep_curl');
//! const report = session.processFrame(landmarks ? flatten(landmarks) : null);
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod kinematics;
pub mod rules;
pub mod session;

use wasm_bindgen::prelude::*;

pub use bridge::ExerciseSession;
pub use config::EngineConfig;
pub use error::ExerciseError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// Level: "trace", "debug", "info", "warn" or "error" (default "info").
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("exercise-web {} ready (log level {})", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
