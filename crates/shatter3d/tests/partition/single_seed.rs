use shatter3d::math::Point;
use shatter3d::partitioning::{FragmentId, PartitionBuilder};
use shatter3d::transformation::uv_sphere;

#[test]
fn single_seed_owns_the_whole_mesh() {
    let mesh = uv_sphere(1.0, 12, 6);
    let original_indices = mesh.indices().to_vec();
    let num_vertices = mesh.num_vertices();

    let shattered = PartitionBuilder::new()
        .build(mesh, &[Point::new(0.3, -0.1, 0.2)])
        .unwrap();
    let fragment = shattered.fragment(FragmentId(0));

    assert_eq!(fragment.faces, original_indices);
    assert_eq!(shattered.fragment_range(FragmentId(0)), 0..original_indices.len());
    assert_eq!(shattered.mesh().num_vertices(), num_vertices);
    assert_eq!(shattered.stats().split_faces, 0);
    assert_eq!(shattered.stats().inserted_vertices, 0);
    assert!(shattered
        .assignment()
        .as_slice()
        .iter()
        .all(|id| *id == FragmentId(0)));
    assert!(fragment.adjacencies.is_empty());
}

#[test]
fn single_seed_reference_bias_is_zero() {
    let shattered = PartitionBuilder::new()
        .build(uv_sphere(1.0, 8, 4), &[Point::new(1.0, 2.0, 3.0)])
        .unwrap();
    let fragment = shattered.fragment(FragmentId(0));

    assert_eq!(fragment.bias, shatter3d::math::Vector::zeros());
    assert_eq!(fragment.rotation_axis, shatter3d::math::Vector::zeros());
    assert_eq!(fragment.phase_offset, 0.0);
}
