//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] session entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod convert;
mod session;

pub use convert::to_js;
pub use session::ExerciseSession;
