use shatter3d::math::{Point, Real};
use shatter3d::partitioning::{
    BoundaryClassifier, NearestSeedIndex, PartitionBuilder, ShatterPartition,
};
use shatter3d::transformation::uv_sphere;

fn random_seeds(rng: &mut oorandom::Rand32, count: usize) -> Vec<Point<Real>> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
            )
        })
        .collect()
}

fn shatter_sphere(rng: &mut oorandom::Rand32, num_seeds: usize) -> (usize, ShatterPartition) {
    let mesh = uv_sphere(1.0, 24, 12);
    let num_original_faces = mesh.num_triangles();
    let seeds = random_seeds(rng, num_seeds);
    let shattered = PartitionBuilder::new().build(mesh, &seeds).unwrap();
    (num_original_faces, shattered)
}

#[test]
fn every_vertex_has_exactly_one_fragment() {
    let mut rng = oorandom::Rand32::new(42);

    for num_seeds in [2, 5, 13, 40] {
        let (_, shattered) = shatter_sphere(&mut rng, num_seeds);
        let mesh = shattered.mesh();
        let assignment = shattered.assignment();
        let classifier = BoundaryClassifier::default();

        assert_eq!(assignment.len(), mesh.num_vertices());
        assert_eq!(assignment.len() * 3, mesh.flat_positions().len());

        for (pt, id) in mesh.positions().iter().zip(assignment.as_slice()) {
            assert!(id.index() < num_seeds);
            // No edge of these spheres is parallel to a bisecting plane.
            assert!(pt.coords.iter().all(|c| c.is_finite()), "{pt} is not finite");

            let seed = &shattered.fragment(*id).seed;
            assert!(classifier.is_near_boundary(pt, seed, seed));
        }
    }
}

#[test]
fn original_vertices_belong_to_their_nearest_seed() {
    let mut rng = oorandom::Rand32::new(7);
    let mesh = uv_sphere(1.0, 16, 8);
    let seeds = random_seeds(&mut rng, 10);
    let index = NearestSeedIndex::new(seeds.clone());
    let expected: Vec<_> = mesh
        .positions()
        .iter()
        .map(|pt| index.nearest(pt).unwrap())
        .collect();

    let shattered = PartitionBuilder::new().build(mesh, &seeds).unwrap();
    assert_eq!(&shattered.assignment().as_slice()[..expected.len()], &expected[..]);
}

#[test]
fn adjacency_is_symmetric() {
    let mut rng = oorandom::Rand32::new(1234);

    for num_seeds in [3, 8, 21] {
        let (_, shattered) = shatter_sphere(&mut rng, num_seeds);

        for (id, fragment) in shattered.fragments_with_ids() {
            assert!(!fragment.is_adjacent_to(id));

            for other in &fragment.adjacencies {
                assert!(shattered.fragment(*other).is_adjacent_to(id));
            }
        }
    }
}

#[test]
fn every_original_face_is_accounted_for() {
    let mut rng = oorandom::Rand32::new(99);

    for num_seeds in [2, 6, 17, 50] {
        let (num_original_faces, shattered) = shatter_sphere(&mut rng, num_seeds);
        let stats = shattered.stats();

        assert_eq!(
            stats.kept_faces + stats.split_faces + stats.unresolved_faces,
            num_original_faces
        );
        assert_eq!(stats.unresolved_faces, shattered.unresolved_faces().len());
        assert_eq!(
            shattered.mesh().num_triangles(),
            stats.kept_faces + 3 * stats.split_faces
        );
        assert_eq!(
            stats.inserted_vertices,
            2 * (stats.split_faces + stats.unresolved_faces)
        );
    }
}

#[test]
fn fragment_ranges_tile_the_index_buffer() {
    let mut rng = oorandom::Rand32::new(5);
    let (_, shattered) = shatter_sphere(&mut rng, 12);
    let num_vertices = shattered.mesh().num_vertices() as u32;
    let mut next = 0;

    for (id, fragment) in shattered.fragments_with_ids() {
        let range = shattered.fragment_range(id);
        assert_eq!(range.start, next);
        assert_eq!(fragment.index_range(), range.start * 3..range.end * 3);
        next = range.end;
    }

    assert_eq!(next, shattered.mesh().num_triangles());
    assert!(shattered
        .mesh()
        .flat_indices()
        .iter()
        .all(|i| *i < num_vertices));
}
