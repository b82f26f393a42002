//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a vertex joint from the vectors
//! vertex→A and vertex→C.

use nalgebra::Vector2;

use super::landmarks::Point2D;

/// Interior angle at `b` formed by `a-b-c`, in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns:
/// - `Some(180.0)` for a straight limb
/// - `Some(90.0)` for a right angle
/// - `None` if `a` or `c` coincides with `b` (zero-length vector)
pub fn joint_angle(a: Point2D, b: Point2D, c: Point2D) -> Option<f64> {
    let ba = Vector2::new(a.x - b.x, a.y - b.y);
    let bc = Vector2::new(c.x - b.x, c.y - b.y);

    let mag_ba = ba.norm();
    let mag_bc = bc.norm();

    if mag_ba == 0.0 || mag_bc == 0.0 {
        return None;
    }

    // Floating error can push the cosine just past ±1, which acos rejects
    let cos_angle = (ba.dot(&bc) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();

    degrees.is_finite().then_some(degrees)
}

/// Same as [`joint_angle`] for loosely-typed input (e.g. coordinates that came
/// through JS). Each point must be exactly `[x, y]` with finite values,
/// otherwise the angle is undefined.
pub fn angle_from_coords(a: &[f64], b: &[f64], c: &[f64]) -> Option<f64> {
    let a = coords_to_point(a)?;
    let b = coords_to_point(b)?;
    let c = coords_to_point(c)?;
    joint_angle(a, b, c)
}

fn coords_to_point(coords: &[f64]) -> Option<Point2D> {
    match coords {
        [x, y] if x.is_finite() && y.is_finite() => Some(Point2D::new(*x, *y)),
        _ => None,
    }
}
