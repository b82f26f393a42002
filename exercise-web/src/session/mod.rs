//! Session module - rep counting, statistics and the per-frame cycle
//!
//! Re-exports only. All logic in submodules.

mod rep_counter;
mod summary;
mod feedback;
mod context;

pub use rep_counter::{RepCounter, RepPhase};
pub use summary::{SessionSummary, SummarySnapshot};
pub use feedback::{
    derive_feedback, display_score, idle_angle,
    Feedback, FeedbackStatus, FeedbackTone,
    HINT_FIRST_REP, HINT_GO_DEEPER, HINT_RESETTING, HINT_KEEP_STEADY, HINT_PERFECT,
};
pub use context::{SessionContext, FrameReport};
