//! Landmark schema and frame decoding
//!
//! The pose estimator runs in JavaScript and hands over 33 body points per
//! frame in pixel coordinates. This module owns the index table and the
//! conversion from the flat buffer JS sends.

use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// x, y, depth, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

/// Length of the flat buffer sent from JS
pub const FLAT_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A 2D point in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Average of two points (used for left/right joint pairs)
    pub fn midpoint(a: Point2D, b: Point2D) -> Self {
        Self {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A single body landmark as reported by the pose estimator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,          // pixels
    pub y: f64,          // pixels
    pub z: f64,          // relative depth
    pub visibility: f64, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// One frame of detected landmarks. Always exactly 33 points; a frame
/// without a person is `Option::<LandmarkSet>::None`.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Decode a flat `[x, y, z, visibility] × 33` buffer
    pub fn from_flat(data: &[f32]) -> Result<Self, ExerciseError> {
        if data.len() != FLAT_LEN {
            return Err(ExerciseError::InvalidLandmarkBuffer {
                len: data.len(),
                expected: FLAT_LEN,
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (slot, chunk) in landmarks.iter_mut().zip(data.chunks_exact(VALUES_PER_LANDMARK)) {
            *slot = Landmark::new(
                f64::from(chunk[0]),
                f64::from(chunk[1]),
                f64::from(chunk[2]),
                f64::from(chunk[3]),
            );
        }
        Ok(Self { landmarks })
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Pixel position of a landmark. Indices come from the constants above,
    /// so out-of-range access is a programming error.
    pub fn point(&self, index: usize) -> Point2D {
        self.landmarks[index].point()
    }

    /// Midpoint of a left/right pair
    pub fn midpoint(&self, left: usize, right: usize) -> Point2D {
        Point2D::midpoint(self.point(left), self.point(right))
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
        }
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl std::ops::IndexMut<usize> for LandmarkSet {
    fn index_mut(&mut self, index: usize) -> &mut Landmark {
        &mut self.landmarks[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_decodes_in_order() {
        let mut data = vec![0.0f32; FLAT_LEN];
        let base = LEFT_KNEE * VALUES_PER_LANDMARK;
        data[base] = 320.0;
        data[base + 1] = 410.0;
        data[base + 2] = -0.25;
        data[base + 3] = 0.9;

        let set = LandmarkSet::from_flat(&data).unwrap();
        let knee = set[LEFT_KNEE];
        assert_eq!(knee.x, 320.0);
        assert_eq!(knee.y, 410.0);
        assert_eq!(knee.z, -0.25);
        assert!((knee.visibility - 0.9).abs() < 1e-6);
        assert_eq!(set[RIGHT_KNEE], Landmark::default());
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        let err = LandmarkSet::from_flat(&[0.0; 99]).unwrap_err();
        assert!(matches!(
            err,
            ExerciseError::InvalidLandmarkBuffer { len: 99, expected: FLAT_LEN }
        ));
    }

    #[test]
    fn test_midpoint() {
        let mut set = LandmarkSet::default();
        set[LEFT_HIP] = Landmark::new(100.0, 200.0, 0.0, 1.0);
        set[RIGHT_HIP] = Landmark::new(140.0, 220.0, 0.0, 1.0);
        assert_eq!(set.midpoint(LEFT_HIP, RIGHT_HIP), Point2D::new(120.0, 210.0));
    }
}
