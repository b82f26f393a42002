//! Rolling stability tracking per joint
//!
//! Keeps the last few angle samples for each named joint and turns their
//! spread into a 0-100 shakiness score (0 = steady, 100 = shaky).

use std::collections::{BTreeMap, VecDeque};

/// Default number of samples kept per joint
pub const DEFAULT_WINDOW: usize = 10;

/// Below this many samples a joint is reported as stable
pub const MIN_SAMPLES: usize = 3;

/// Standard deviation (degrees) that maps to a score of 100
pub const SATURATION_STDDEV: f64 = 5.0;

/// Per-joint ring buffers of recent angles
#[derive(Clone, Debug)]
pub struct StabilityTracker {
    window: usize,
    history: BTreeMap<String, VecDeque<f64>>,
}

impl StabilityTracker {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Tracker with a custom window. A zero window is bumped to one sample.
    pub fn with_window(window: usize) -> Self {
        Self {
            window: window.max(1),
            history: BTreeMap::new(),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Record an angle sample. Undefined angles are ignored.
    pub fn push(&mut self, joint: &str, angle: Option<f64>) {
        let Some(angle) = angle else {
            return;
        };

        let window = self.window;
        let samples = self
            .history
            .entry(joint.to_string())
            .or_insert_with(|| VecDeque::with_capacity(window + 1));

        samples.push_back(angle);
        while samples.len() > window {
            samples.pop_front();
        }
    }

    /// Shakiness score for a joint in [0, 100]
    pub fn score(&self, joint: &str) -> f64 {
        self.history.get(joint).map_or(0.0, |samples| Self::score_samples(samples))
    }

    /// Scores for every joint seen so far
    pub fn scores(&self) -> BTreeMap<String, f64> {
        self.history
            .iter()
            .map(|(joint, samples)| (joint.clone(), Self::score_samples(samples)))
            .collect()
    }

    /// Number of samples currently held for a joint
    pub fn sample_count(&self, joint: &str) -> usize {
        self.history.get(joint).map_or(0, VecDeque::len)
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn score_samples(samples: &VecDeque<f64>) -> f64 {
        if samples.len() < MIN_SAMPLES {
            return 0.0;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let stddev = variance.sqrt();

        (stddev / SATURATION_STDDEV * 100.0).min(100.0)
    }
}

impl Default for StabilityTracker {
    fn default() -> Self {
        Self::new()
    }
}
