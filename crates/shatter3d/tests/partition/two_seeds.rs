use approx::assert_relative_eq;
use shatter3d::math::{Point, Real, Vector};
use shatter3d::partitioning::{FragmentId, PartitionBuilder};
use shatter3d::shape::MeshBuffers;
use shatter3d::transformation::cuboid;

#[test]
fn two_and_one_triangle_is_split_in_three() {
    let positions = vec![
        Point::new(-1.0, 0.0, 0.0),
        Point::new(-1.0, 1.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
    ];
    let mesh = MeshBuffers::new(positions, vec![[0, 1, 2]]).unwrap();
    let seeds = [Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
    let shattered = PartitionBuilder::new().build(mesh, &seeds).unwrap();

    let stats = shattered.stats();
    assert_eq!(stats.split_faces, 1);
    assert_eq!(stats.inserted_vertices, 2);
    assert_eq!(shattered.mesh().num_vertices(), 5);
    assert_eq!(shattered.mesh().num_triangles(), 3);

    let shared = shattered.fragment(FragmentId(0));
    let lone = shattered.fragment(FragmentId(1));
    assert_eq!(shared.faces.len(), 2);
    assert_eq!(lone.faces.len(), 1);
    assert!(shared.is_adjacent_to(FragmentId(1)));
    assert!(lone.is_adjacent_to(FragmentId(0)));

    // The boundary vertices lie on the bisecting plane x = 0.
    for p in &shattered.mesh().positions()[3..] {
        assert_relative_eq!(p.x, 0.0);
    }

    // Normals are interpolated for the new vertices.
    let normals = shattered.mesh().normals().unwrap();
    assert_eq!(normals.len(), 5);
    assert_relative_eq!(normals[4], -Vector::z(), epsilon = 1.0e-6);
}

#[test]
fn cuboid_halves() {
    let seeds = [Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
    let shattered = PartitionBuilder::new()
        .build(cuboid(Vector::repeat(1.0)), &seeds)
        .unwrap();
    let mesh = shattered.mesh();

    for (id, fragment) in shattered.fragments_with_ids() {
        for face in shattered.fragment_indices(id) {
            let centroid = Point::from(
                face.iter()
                    .map(|i| mesh.position(*i).coords)
                    .sum::<Vector<Real>>()
                    / 3.0,
            );
            let own_distance = shatter3d::na::distance(&centroid, &fragment.seed);
            let closer_to_own_seed = shattered.fragments().iter().all(|other| {
                own_distance <= shatter3d::na::distance(&centroid, &other.seed) + 1.0e-5
            });
            assert!(closer_to_own_seed, "{face:?} in {id:?} is closer to another seed");
        }
    }

    let total_area: Real = mesh
        .indices()
        .iter()
        .map(|[a, b, c]| {
            let (a, b, c) = (mesh.position(*a), mesh.position(*b), mesh.position(*c));
            (b - a).cross(&(c - a)).norm() / 2.0
        })
        .sum();
    assert_relative_eq!(total_area, 24.0, epsilon = 1.0e-4);
}
