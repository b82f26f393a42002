//! Threshold tables and difficulty-mode merging
//!
//! Each exercise has a base table of named angle thresholds (degrees). A
//! difficulty mode carries additive deltas per exercise; merging adds each
//! delta to the matching base key and drops deltas for keys the base does
//! not define.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::exercise::{DifficultyMode, Exercise};

// ============================================================================
// THRESHOLD KEYS AND FALLBACK DEFAULTS
// ============================================================================

// Squat: 180 = standing, ~70 = deep squat
pub const KNEE_ANGLE_DEEP: &str = "knee_angle_deep";
pub const KNEE_ANGLE_HIGH: &str = "knee_angle_high";
pub const KNEE_SAFE_MIN: &str = "knee_safe_min";
pub const HIP_MIN: &str = "hip_min";
pub const BACK_MIN: &str = "back_min";

// Push-up: 180 = high plank, ~90 = low plank
pub const ELBOW_TARGET: &str = "elbow_target";
pub const ELBOW_RESET: &str = "elbow_reset";
pub const BODY_MIN: &str = "body_min";

// Bicep curl: 180 = extended, ~40 = curled
pub const CURL_FLEXION_THRESH: &str = "curl_flexion_thresh";
pub const CURL_EXTENSION_THRESH: &str = "curl_extension_thresh";

// Shared
pub const ELBOW_SAFE_MIN: &str = "elbow_safe_min";
pub const PASS_SCORE: &str = "pass_score";

pub const DEFAULT_KNEE_ANGLE_DEEP: f64 = 80.0;
pub const DEFAULT_KNEE_ANGLE_HIGH: f64 = 160.0;
pub const DEFAULT_KNEE_SAFE_MIN: f64 = 40.0;
pub const DEFAULT_BACK_MIN: f64 = 140.0;
pub const DEFAULT_ELBOW_TARGET: f64 = 100.0;
pub const DEFAULT_ELBOW_RESET: f64 = 160.0;
pub const DEFAULT_BODY_MIN: f64 = 160.0;
pub const DEFAULT_CURL_FLEXION: f64 = 60.0;
pub const DEFAULT_CURL_EXTENSION: f64 = 150.0;
pub const DEFAULT_CURL_ELBOW_SAFE_MIN: f64 = 20.0;
pub const DEFAULT_PASS_SCORE: f64 = 60.0;

// ============================================================================
// THRESHOLD TABLE
// ============================================================================

/// Named thresholds for one exercise
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds(BTreeMap<String, f64>);

impl Thresholds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Value for `key`, or `default` when the table does not define it
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn insert(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Add `delta` onto `base`. Only keys already present in `base` are adjusted;
/// neither input is modified.
pub fn merge_thresholds(base: &Thresholds, delta: &Thresholds) -> Thresholds {
    let mut merged = base.clone();
    for (key, offset) in delta.iter() {
        if let Some(value) = merged.0.get_mut(key) {
            *value += offset;
        }
    }
    merged
}

// ============================================================================
// CATALOG
// ============================================================================

/// Base tables per exercise plus per-mode delta tables.
///
/// Mode keys are plain strings so a configuration can carry profiles this
/// build does not know about; only `beginner` and `advanced` are selectable.
///
/// Deserializing reads [`ThresholdOverrides`] and layers them key by key over
/// the built-in catalog, so `{ base: { squat: { back_min: 150 } } }` changes
/// one value and keeps every other table and mode delta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThresholdOverrides")]
pub struct ThresholdCatalog {
    pub base: BTreeMap<Exercise, Thresholds>,
    pub modes: BTreeMap<String, BTreeMap<Exercise, Thresholds>>,
}

/// Partial catalog as supplied by configuration. Every level is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub base: BTreeMap<Exercise, Thresholds>,
    pub modes: BTreeMap<String, BTreeMap<Exercise, Thresholds>>,
}

fn layer_tables(
    into: &mut BTreeMap<Exercise, Thresholds>,
    from: BTreeMap<Exercise, Thresholds>,
) {
    for (exercise, table) in from {
        let target = into.entry(exercise).or_default();
        for (key, value) in table.0 {
            target.0.insert(key, value);
        }
    }
}

impl From<ThresholdOverrides> for ThresholdCatalog {
    fn from(overrides: ThresholdOverrides) -> Self {
        let mut catalog = ThresholdCatalog::default();
        catalog.apply(overrides);
        catalog
    }
}

impl ThresholdCatalog {
    /// Layer overrides onto this catalog. Keys present in an override replace
    /// the current value; everything else is kept.
    pub fn apply(&mut self, overrides: ThresholdOverrides) {
        layer_tables(&mut self.base, overrides.base);
        for (mode, deltas) in overrides.modes {
            layer_tables(self.modes.entry(mode).or_default(), deltas);
        }
    }

    /// First mode delta key that has no base value for `exercise`. Such a
    /// delta would be dropped by [`merge_thresholds`].
    pub fn orphan_delta(&self, exercise: Exercise, mode: DifficultyMode) -> Option<&str> {
        let deltas = self.modes.get(mode.as_str())?.get(&exercise)?;
        let base = self.base.get(&exercise);
        deltas
            .iter()
            .map(|(key, _)| key)
            .find(|key| !base.is_some_and(|table| table.contains(key)))
    }

    /// Effective thresholds for an exercise under a difficulty mode
    pub fn resolve(&self, exercise: Exercise, mode: DifficultyMode) -> Thresholds {
        let base = self.base.get(&exercise).cloned().unwrap_or_default();
        match self
            .modes
            .get(mode.as_str())
            .and_then(|deltas| deltas.get(&exercise))
        {
            Some(delta) => merge_thresholds(&base, delta),
            None => base,
        }
    }

    pub fn base_for(&self, exercise: Exercise) -> Option<&Thresholds> {
        self.base.get(&exercise)
    }
}

impl Default for ThresholdCatalog {
    fn default() -> Self {
        let base = BTreeMap::from([
            (
                Exercise::Squat,
                Thresholds::from_pairs([
                    (KNEE_ANGLE_DEEP, DEFAULT_KNEE_ANGLE_DEEP), // below = 'down'
                    (KNEE_ANGLE_HIGH, DEFAULT_KNEE_ANGLE_HIGH), // above = 'up'
                    (KNEE_SAFE_MIN, DEFAULT_KNEE_SAFE_MIN),
                    (HIP_MIN, 80.0),
                    (BACK_MIN, DEFAULT_BACK_MIN),
                    // Informational: squat passes above the flat 60
                    (PASS_SCORE, 70.0),
                ]),
            ),
            (
                Exercise::Pushup,
                Thresholds::from_pairs([
                    (ELBOW_TARGET, DEFAULT_ELBOW_TARGET),
                    (ELBOW_RESET, DEFAULT_ELBOW_RESET),
                    (ELBOW_SAFE_MIN, 40.0),
                    (BODY_MIN, DEFAULT_BODY_MIN),
                    // Informational: push-up passes above the flat 60
                    (PASS_SCORE, 75.0),
                ]),
            ),
            (
                Exercise::BicepCurl,
                Thresholds::from_pairs([
                    (CURL_FLEXION_THRESH, DEFAULT_CURL_FLEXION),
                    (CURL_EXTENSION_THRESH, DEFAULT_CURL_EXTENSION),
                    (ELBOW_SAFE_MIN, DEFAULT_CURL_ELBOW_SAFE_MIN),
                    (PASS_SCORE, DEFAULT_PASS_SCORE),
                ]),
            ),
        ]);

        let modes = BTreeMap::from([
            (
                DifficultyMode::Beginner.as_str().to_string(),
                BTreeMap::from([
                    // Shallower targets: 80 + 10 = 90, 100 + 10 = 110
                    (Exercise::Squat, Thresholds::from_pairs([(KNEE_ANGLE_DEEP, 10.0)])),
                    (Exercise::Pushup, Thresholds::from_pairs([(ELBOW_TARGET, 10.0)])),
                    (Exercise::BicepCurl, Thresholds::new()),
                ]),
            ),
            (
                DifficultyMode::Advanced.as_str().to_string(),
                BTreeMap::from([
                    (Exercise::Squat, Thresholds::from_pairs([(KNEE_ANGLE_DEEP, 0.0)])),
                    (Exercise::Pushup, Thresholds::from_pairs([(ELBOW_TARGET, 0.0)])),
                    (Exercise::BicepCurl, Thresholds::new()),
                ]),
            ),
        ]);

        Self { base, modes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adds_and_drops_unknown_keys() {
        let base = Thresholds::from_pairs([("a", 80.0)]);
        let delta = Thresholds::from_pairs([("a", 10.0), ("b", 5.0)]);
        let merged = merge_thresholds(&base, &delta);

        assert_eq!(merged, Thresholds::from_pairs([("a", 90.0)]));
        assert!(!merged.contains("b"));
        // Inputs untouched
        assert_eq!(base.get("a"), Some(80.0));
        assert_eq!(delta.len(), 2);
    }

    #[test]
    fn test_merge_keeps_keys_without_delta() {
        let base = Thresholds::from_pairs([("a", 80.0), ("c", 1.0)]);
        let merged = merge_thresholds(&base, &Thresholds::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_resolve_modes() {
        let catalog = ThresholdCatalog::default();

        let beginner = catalog.resolve(Exercise::Squat, DifficultyMode::Beginner);
        assert_eq!(beginner.get(KNEE_ANGLE_DEEP), Some(90.0));
        assert_eq!(beginner.get(KNEE_ANGLE_HIGH), Some(160.0));

        let advanced = catalog.resolve(Exercise::Squat, DifficultyMode::Advanced);
        assert_eq!(advanced.get(KNEE_ANGLE_DEEP), Some(80.0));

        let pushup = catalog.resolve(Exercise::Pushup, DifficultyMode::Beginner);
        assert_eq!(pushup.get(ELBOW_TARGET), Some(110.0));

        let curl = catalog.resolve(Exercise::BicepCurl, DifficultyMode::Beginner);
        assert_eq!(Some(&curl), catalog.base_for(Exercise::BicepCurl));

        // Base tables are never mutated by resolving
        assert_eq!(
            catalog.base_for(Exercise::Squat).and_then(|t| t.get(KNEE_ANGLE_DEEP)),
            Some(80.0)
        );
    }

    #[test]
    fn test_resolve_without_mode_profile_uses_base() {
        let mut catalog = ThresholdCatalog::default();
        catalog.modes.clear();
        let squat = catalog.resolve(Exercise::Squat, DifficultyMode::Beginner);
        assert_eq!(squat.get(KNEE_ANGLE_DEEP), Some(80.0));
    }

    #[test]
    fn test_overrides_layer_over_defaults() {
        let squat = Thresholds::from_pairs([(BACK_MIN, 150.0)]);
        let overrides = ThresholdOverrides {
            base: BTreeMap::from([(Exercise::Squat, squat)]),
            ..Default::default()
        };
        let catalog = ThresholdCatalog::from(overrides);

        let squat = catalog.resolve(Exercise::Squat, DifficultyMode::Beginner);
        assert_eq!(squat.get(BACK_MIN), Some(150.0));
        assert_eq!(squat.get(KNEE_ANGLE_DEEP), Some(90.0));
        assert_eq!(squat.get(KNEE_ANGLE_HIGH), Some(160.0));

        let pushup = catalog.resolve(Exercise::Pushup, DifficultyMode::Beginner);
        assert_eq!(pushup.get(ELBOW_TARGET), Some(110.0));
        assert_eq!(catalog.orphan_delta(Exercise::Squat, DifficultyMode::Beginner), None);
    }

    #[test]
    fn test_mode_override_replaces_one_delta() {
        let squat_delta = Thresholds::from_pairs([(KNEE_ANGLE_DEEP, 20.0)]);
        let mut catalog = ThresholdCatalog::default();
        catalog.apply(ThresholdOverrides {
            modes: BTreeMap::from([(
                "beginner".to_string(),
                BTreeMap::from([(Exercise::Squat, squat_delta)]),
            )]),
            ..Default::default()
        });

        let squat = catalog.resolve(Exercise::Squat, DifficultyMode::Beginner);
        assert_eq!(squat.get(KNEE_ANGLE_DEEP), Some(100.0));
        let pushup = catalog.resolve(Exercise::Pushup, DifficultyMode::Beginner);
        assert_eq!(pushup.get(ELBOW_TARGET), Some(110.0));
    }

    #[test]
    fn test_orphan_delta_detected() {
        let mut catalog = ThresholdCatalog::default();
        catalog.base.insert(Exercise::Squat, Thresholds::from_pairs([(BACK_MIN, 150.0)]));
        assert_eq!(
            catalog.orphan_delta(Exercise::Squat, DifficultyMode::Beginner),
            Some(KNEE_ANGLE_DEEP)
        );
        assert_eq!(catalog.orphan_delta(Exercise::BicepCurl, DifficultyMode::Beginner), None);
    }

    #[test]
    fn test_get_or_falls_back() {
        let table = Thresholds::new();
        assert_eq!(table.get_or(BACK_MIN, DEFAULT_BACK_MIN), 140.0);
    }
}
