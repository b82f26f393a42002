//! Rep counting with a two-state hysteresis machine
//!
//! REST (extended/standing) → PEAK when the signal drops below the enter
//! threshold; PEAK → REST when it rises above the exit threshold. Only the
//! PEAK → REST edge completes a rep. Values between the thresholds never
//! change state, so noise around one threshold cannot double count.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    #[default]
    Rest,
    Peak,
}

impl RepPhase {
    /// Pure transition. Returns the next phase and whether a rep completed.
    pub fn transition(self, value: f64, enter_peak: f64, exit_peak: f64) -> (RepPhase, bool) {
        match self {
            RepPhase::Rest if value < enter_peak => (RepPhase::Peak, false),
            RepPhase::Peak if value > exit_peak => (RepPhase::Rest, true),
            phase => (phase, false),
        }
    }
}

/// Rep counter for one exercise
#[derive(Clone, Debug, Default)]
pub struct RepCounter {
    phase: RepPhase,
}

impl RepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one signal sample. Returns true exactly when a rep completes.
    pub fn process(&mut self, value: f64, enter_peak: f64, exit_peak: f64) -> bool {
        if enter_peak >= exit_peak {
            log::warn!(
                "rep thresholds have no hysteresis band (enter {} >= exit {})",
                enter_peak,
                exit_peak
            );
        }

        let (next, completed) = self.phase.transition(value, enter_peak, exit_peak);
        if next != self.phase {
            log::debug!("rep phase {:?} -> {:?} at {:.1}°", self.phase, next, value);
        }
        self.phase = next;
        completed
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn in_peak(&self) -> bool {
        self.phase == RepPhase::Peak
    }

    pub fn reset(&mut self) {
        self.phase = RepPhase::Rest;
    }
}
