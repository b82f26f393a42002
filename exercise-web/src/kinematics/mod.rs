//! Kinematics module - landmark schema, joint angles and stability
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod angles;
mod stability;

pub use landmarks::{
    Landmark, LandmarkSet, Point2D,
    LANDMARK_COUNT, VALUES_PER_LANDMARK, FLAT_LEN,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};
pub use angles::{joint_angle, angle_from_coords};
pub use stability::{StabilityTracker, DEFAULT_WINDOW, MIN_SAMPLES, SATURATION_STDDEV};
