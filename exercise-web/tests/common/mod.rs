//! Synthetic pose builders shared by integration tests
#![allow(dead_code)]

use exercise_web::kinematics::{
    Landmark, LandmarkSet, Point2D, FLAT_LEN,
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Point at `len` from `vertex`, rotated `degrees` away from the direction
/// vertex→`toward`. The angle toward-vertex-result is then `degrees`.
pub fn rotate_from(vertex: Point2D, toward: Point2D, degrees: f64, len: f64) -> Point2D {
    let dx = toward.x - vertex.x;
    let dy = toward.y - vertex.y;
    let norm = dx.hypot(dy);
    let (ux, uy) = (dx / norm, dy / norm);
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point2D::new(
        vertex.x + (ux * cos - uy * sin) * len,
        vertex.y + (ux * sin + uy * cos) * len,
    )
}

fn set_pair(set: &mut LandmarkSet, left: usize, right: usize, point: Point2D) {
    set[left] = Landmark::new(point.x, point.y, 0.0, 1.0);
    set[right] = Landmark::new(point.x, point.y, 0.0, 1.0);
}

/// Symmetric squat pose with the given knee (hip-knee-ankle) and back
/// (shoulder-hip-knee) angles. Arms hang off the shoulders.
pub fn squat_pose(knee_angle: f64, back_angle: f64) -> LandmarkSet {
    let ankle = Point2D::new(320.0, 450.0);
    let knee = Point2D::new(320.0, 350.0);
    let hip = rotate_from(knee, ankle, knee_angle, 100.0);
    let shoulder = rotate_from(hip, knee, back_angle, 150.0);

    let mut set = LandmarkSet::default();
    set_pair(&mut set, LEFT_ANKLE, RIGHT_ANKLE, ankle);
    set_pair(&mut set, LEFT_KNEE, RIGHT_KNEE, knee);
    set_pair(&mut set, LEFT_HIP, RIGHT_HIP, hip);
    set_pair(&mut set, LEFT_SHOULDER, RIGHT_SHOULDER, shoulder);
    set_pair(&mut set, LEFT_ELBOW, RIGHT_ELBOW, Point2D::new(shoulder.x, shoulder.y + 60.0));
    set_pair(&mut set, LEFT_WRIST, RIGHT_WRIST, Point2D::new(shoulder.x, shoulder.y + 120.0));
    set
}

/// Symmetric push-up pose with the given elbow (shoulder-elbow-wrist) and
/// body line (shoulder-hip-ankle) angles
pub fn pushup_pose(elbow_angle: f64, body_angle: f64) -> LandmarkSet {
    let shoulder = Point2D::new(200.0, 300.0);
    let hip = Point2D::new(350.0, 300.0);
    let ankle = rotate_from(hip, shoulder, body_angle, 150.0);
    let wrist = Point2D::new(200.0, 400.0);
    // Elbow placed so the shoulder-elbow-wrist angle is exact: pick the elbow
    // on the shoulder→wrist perpendicular bisector at the right height.
    let half = 50.0;
    let offset = half / (elbow_angle.to_radians() / 2.0).tan();
    let elbow = Point2D::new(200.0 + offset, 350.0);

    let mut set = LandmarkSet::default();
    set_pair(&mut set, LEFT_SHOULDER, RIGHT_SHOULDER, shoulder);
    set_pair(&mut set, LEFT_ELBOW, RIGHT_ELBOW, elbow);
    set_pair(&mut set, LEFT_WRIST, RIGHT_WRIST, wrist);
    set_pair(&mut set, LEFT_HIP, RIGHT_HIP, hip);
    set_pair(&mut set, LEFT_KNEE, RIGHT_KNEE, Point2D::new(425.0, 300.0));
    set_pair(&mut set, LEFT_ANKLE, RIGHT_ANKLE, ankle);
    set
}

/// Arms with independent elbow angles (left, right). `None` collapses that
/// arm onto a single point so its angle is undefined.
pub fn curl_pose(left: Option<f64>, right: Option<f64>) -> LandmarkSet {
    let mut set = LandmarkSet::default();
    place_arm(&mut set, (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST), 260.0, left);
    place_arm(&mut set, (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST), 380.0, right);
    set
}

fn place_arm(set: &mut LandmarkSet, (s, e, w): (usize, usize, usize), x: f64, angle: Option<f64>) {
    let shoulder = Point2D::new(x, 200.0);
    let Some(angle) = angle else {
        for idx in [s, e, w] {
            set[idx] = Landmark::new(shoulder.x, shoulder.y, 0.0, 0.1);
        }
        return;
    };
    let elbow = Point2D::new(x, 300.0);
    let wrist = rotate_from(elbow, shoulder, angle, 90.0);
    set[s] = Landmark::new(shoulder.x, shoulder.y, 0.0, 1.0);
    set[e] = Landmark::new(elbow.x, elbow.y, 0.0, 1.0);
    set[w] = Landmark::new(wrist.x, wrist.y, 0.0, 1.0);
}

/// Flatten into the buffer layout JS sends
pub fn flatten(set: &LandmarkSet) -> Vec<f32> {
    let mut data = Vec::with_capacity(FLAT_LEN);
    for lm in set.as_slice() {
        data.extend_from_slice(&[lm.x as f32, lm.y as f32, lm.z as f32, lm.visibility as f32]);
    }
    data
}
