//! Full evaluation cycle: rules → rep counter → summary → feedback

mod common;

use common::{curl_pose, flatten, squat_pose};
use exercise_web::rules::{DifficultyMode, Exercise, NO_PERSON_MESSAGE};
use exercise_web::rules::keys::KNEE_ANGLE_DEEP;
use exercise_web::session::{FeedbackStatus, RepPhase, SessionContext, HINT_FIRST_REP};
use exercise_web::{EngineConfig, ExerciseSession};

fn advanced_session(exercise: Exercise) -> SessionContext {
    SessionContext::new(EngineConfig {
        exercise,
        mode: DifficultyMode::Advanced,
        ..Default::default()
    })
}

/// Standing → deep → standing, returns how many reps completed
fn squat_once(ctx: &mut SessionContext) -> usize {
    [170.0, 70.0, 70.0, 170.0]
        .into_iter()
        .map(|knee| ctx.tick(Some(&squat_pose(knee, 150.0))))
        .filter(|report| report.rep_completed)
        .count()
}

#[test]
fn test_one_squat_counts_one_rep() {
    let mut ctx = advanced_session(Exercise::Squat);

    let standing = ctx.tick(Some(&squat_pose(170.0, 150.0)));
    assert!(!standing.rep_completed);
    assert_eq!(standing.phase, RepPhase::Rest);
    assert_eq!(standing.feedback.status, FeedbackStatus::Ready);
    assert_eq!(standing.feedback.text, HINT_FIRST_REP);

    let deep = ctx.tick(Some(&squat_pose(70.0, 150.0)));
    assert!(!deep.rep_completed);
    assert_eq!(deep.phase, RepPhase::Peak);

    let still_deep = ctx.tick(Some(&squat_pose(70.0, 150.0)));
    assert!(!still_deep.rep_completed);

    let up = ctx.tick(Some(&squat_pose(170.0, 150.0)));
    assert!(up.rep_completed);
    assert_eq!(up.phase, RepPhase::Rest);
    assert_eq!(up.summary.total_reps, 1);
    // The rep is scored with the frame that completed it
    assert_eq!(up.summary.correct_reps, 0);
    assert_eq!(up.summary.avg_posture_score, 50.0);
    assert_eq!(up.feedback.status, FeedbackStatus::Resting);
}

#[test]
fn test_no_person_does_not_touch_counter() {
    let mut ctx = advanced_session(Exercise::Squat);
    ctx.tick(Some(&squat_pose(70.0, 150.0)));
    assert!(ctx.counter(Exercise::Squat).in_peak());

    let report = ctx.tick(None);
    assert_eq!(report.result.messages, vec![NO_PERSON_MESSAGE.to_string()]);
    assert_eq!(report.primary_angle, None);
    assert!(ctx.counter(Exercise::Squat).in_peak());

    assert!(ctx.tick(Some(&squat_pose(170.0, 150.0))).rep_completed);
}

#[test]
fn test_mode_switch_keeps_stats_and_rethresholds() {
    let mut ctx = advanced_session(Exercise::Squat);
    assert_eq!(squat_once(&mut ctx), 1);
    assert_eq!(ctx.thresholds(Exercise::Squat).get(KNEE_ANGLE_DEEP), Some(80.0));

    ctx.set_mode(DifficultyMode::Beginner);
    assert_eq!(ctx.thresholds(Exercise::Squat).get(KNEE_ANGLE_DEEP), Some(90.0));
    assert_eq!(ctx.summary(Exercise::Squat).total_reps, 1);

    assert_eq!(squat_once(&mut ctx), 1);
    assert_eq!(ctx.summary(Exercise::Squat).total_reps, 2);
}

#[test]
fn test_exercises_keep_separate_stats() {
    let mut ctx = advanced_session(Exercise::Squat);
    squat_once(&mut ctx);

    ctx.set_exercise(Exercise::BicepCurl);
    for (left, right) in [(170.0, 170.0), (45.0, 170.0), (160.0, 170.0)] {
        ctx.tick(Some(&curl_pose(Some(left), Some(right))));
    }
    assert_eq!(ctx.summary(Exercise::BicepCurl).total_reps, 1);
    assert_eq!(ctx.summary(Exercise::Squat).total_reps, 1);

    ctx.reset_stats(Exercise::BicepCurl);
    assert_eq!(ctx.summary(Exercise::BicepCurl).total_reps, 0);
    assert!(!ctx.counter(Exercise::BicepCurl).in_peak());
    assert_eq!(ctx.summary(Exercise::Squat).total_reps, 1);
}

#[test]
fn test_reset_mid_rep_drops_peak() {
    let mut ctx = advanced_session(Exercise::Squat);
    ctx.tick(Some(&squat_pose(70.0, 150.0)));
    ctx.reset_stats(Exercise::Squat);
    assert!(!ctx.tick(Some(&squat_pose(170.0, 150.0))).rep_completed);
}

#[test]
fn test_session_bridge_native_path() {
    let mut session = ExerciseSession::from_config(EngineConfig {
        mode: DifficultyMode::Advanced,
        ..Default::default()
    });

    let mut completed = 0;
    for knee in [170.0, 70.0, 170.0] {
        let data = flatten(&squat_pose(knee, 150.0));
        let report = session.process(Some(&data)).unwrap();
        completed += usize::from(report.rep_completed);
    }
    assert_eq!(completed, 1);
    assert_eq!(session.context().summary(Exercise::Squat).total_reps, 1);
}

#[test]
fn test_partial_threshold_config_keeps_beginner_offsets() {
    let json = r#"{
        "mode": "beginner",
        "thresholds": { "base": { "squat": { "back_min": 150 } } }
    }"#;
    let config: EngineConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.validate(), Ok(()));

    let ctx = SessionContext::new(config);
    assert_eq!(ctx.thresholds(Exercise::Squat).get(KNEE_ANGLE_DEEP), Some(90.0));
    assert_eq!(ctx.rule(Exercise::Pushup).rep_thresholds(), (110.0, 160.0));
}
