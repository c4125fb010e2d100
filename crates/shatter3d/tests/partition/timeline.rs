use approx::assert_relative_eq;
use shatter3d::math::{Real, Rotation, UnitVector, Vector};
use shatter3d::motion::{Keyframe, KeyframeTimeline};
use shatter3d::na::RealField;

#[test]
fn timeline_ends_match_their_keyframes() {
    let timeline = KeyframeTimeline::from_keyframes([
        Keyframe { time: 0.0, angle: 0.3 },
        Keyframe { time: 4.0, angle: -1.0 },
        Keyframe { time: 2.0, angle: 1.2 },
    ])
    .unwrap();
    let axis = Vector::new(1.0, 2.0, -0.5);
    let unit_axis = UnitVector::new_normalize(axis);

    assert_relative_eq!(
        timeline.evaluate(0.0, &axis),
        Rotation::from_axis_angle(&unit_axis, 0.3)
    );
    assert_relative_eq!(
        timeline.evaluate(timeline.total_time(), &axis),
        Rotation::from_axis_angle(&unit_axis, -1.0)
    );
    assert_relative_eq!(timeline.angle_at(1.0), 0.75);
    assert_relative_eq!(timeline.angle_at(3.5), -0.45, epsilon = 1.0e-6);
}

#[test]
fn rotate_and_return_plateau() {
    let timeline = KeyframeTimeline::default();
    let quarter_turn = Real::frac_pi_2();
    let axis = Vector::z();

    let plateau = timeline.evaluate(5.0, &axis);
    assert_relative_eq!(plateau.angle(), quarter_turn, epsilon = 1.0e-6);

    let returning = timeline.angle_at(10.5);
    assert!(returning > 0.0 && returning < quarter_turn);
    assert_relative_eq!(returning, quarter_turn / 2.0, epsilon = 1.0e-6);
}

#[test]
fn times_outside_the_keyframes_are_clamped() {
    let timeline = KeyframeTimeline::rotate_and_return();

    assert_eq!(timeline.angle_at(-10.0), timeline.keyframes()[0].angle);
    assert_eq!(timeline.angle_at(100.0), timeline.keyframes()[4].angle);
}
