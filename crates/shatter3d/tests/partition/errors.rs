use shatter3d::math::{Point, Real};
use shatter3d::partitioning::{NearestSeedIndex, PartitionBuilder, PartitionError};
use shatter3d::shape::{MeshBuffers, MeshBuffersError};

fn shatter_flat(positions: &[Real], indices: &[u32]) -> Result<usize, PartitionError> {
    let mesh = MeshBuffers::from_flat(positions, &[], &[], indices)?;
    let shattered = PartitionBuilder::new().build(mesh, &[Point::origin()])?;
    Ok(shattered.fragments().len())
}

#[test]
fn empty_seeds_produce_no_partition() {
    let result = PartitionBuilder::new().build(MeshBuffers::flat_quad(), &[]);
    assert_eq!(result.err(), Some(PartitionError::EmptySeeds));
}

#[test]
fn nearest_fragment_of_nothing() {
    let index = NearestSeedIndex::new(vec![]);
    assert_eq!(
        index.nearest(&Point::new(1.0, 2.0, 3.0)),
        Err(PartitionError::EmptyFragmentSet)
    );
}

#[test]
fn mesh_errors_are_forwarded() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

    assert_eq!(shatter_flat(&positions, &[0, 1, 2]), Ok(1));
    assert_eq!(
        shatter_flat(&positions, &[0, 1, 3]),
        Err(PartitionError::Mesh(MeshBuffersError::IndexOutOfBounds {
            triangle: 0,
            index: 3,
            num_vertices: 3
        }))
    );
    assert_eq!(
        shatter_flat(&positions, &[0, 1]),
        Err(PartitionError::Mesh(MeshBuffersError::FlatBufferLength {
            buffer: "index",
            len: 2,
            stride: 3
        }))
    );
}

#[test]
fn errors_are_displayable() {
    let err = PartitionError::InvalidReferenceSeed {
        reference: 3,
        num_seeds: 2,
    };
    assert!(err.to_string().contains("reference seed 3"));

    let err = PartitionError::from(MeshBuffersError::EmptyIndices);
    assert!(err.to_string().starts_with("invalid mesh buffers"));
}
