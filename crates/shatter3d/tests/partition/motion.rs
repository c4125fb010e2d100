use approx::assert_relative_eq;
use shatter3d::math::{Point, Vector};
use shatter3d::motion::{OutSpeedUp, RigidMotion};
use shatter3d::partitioning::{FragmentId, PartitionBuilder};
use shatter3d::transformation::uv_sphere;

fn seeds() -> Vec<Point<f32>> {
    vec![
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, -1.0, 0.5),
    ]
}

#[test]
fn default_phase_offsets_grow_with_the_distance() {
    let shattered = PartitionBuilder::new()
        .build(uv_sphere(1.0, 16, 8), &seeds())
        .unwrap();
    let reference_seed = shattered.fragment(FragmentId(0)).seed;

    for fragment in shattered.fragments() {
        let d2 = shatter3d::na::distance_squared(&fragment.seed, &reference_seed);
        assert_relative_eq!(fragment.phase_offset, 5.0 * d2);
        assert_relative_eq!(fragment.rotation_axis, fragment.bias.cross(&fragment.normal));
    }

    let reference = shattered.fragment(FragmentId(0));
    let expected_bias: Vector<f32> = seeds().iter().map(|s| reference_seed - s).sum();
    assert_relative_eq!(reference.bias, expected_bias);
}

#[test]
fn fragment_normals_are_unit_or_zero() {
    let shattered = PartitionBuilder::new()
        .build(uv_sphere(1.0, 16, 8), &seeds())
        .unwrap();

    for fragment in shattered.fragments() {
        let norm = fragment.normal.norm();
        assert!(norm == 0.0 || (norm - 1.0).abs() < 1.0e-5);
    }

    // The fragment seeded at the north pole faces up.
    assert!(shattered.fragment(FragmentId(0)).normal.y > 0.8);
}

#[test]
fn fragments_loop_around_their_seed() {
    let shattered = PartitionBuilder::new()
        .with_offset_policy(OutSpeedUp)
        .build(uv_sphere(1.0, 16, 8), &seeds())
        .unwrap();
    let period = shattered.timeline().total_time();

    for (id, fragment) in shattered.fragments_with_ids() {
        let motion = shattered.motion(id);

        for t in [0.0, 0.7, 3.0, 10.4, 13.0] {
            let pos = motion.position_at_time(t);
            assert_relative_eq!(pos * fragment.seed, fragment.seed, epsilon = 1.0e-4);

            if t + fragment.phase_offset >= 0.0 {
                let later = motion.position_at_time(t + period);
                assert_relative_eq!(later, pos, epsilon = 1.0e-4);
            }
        }
    }
}
