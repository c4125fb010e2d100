use crate::shape::MeshBuffersError;

/// Errors reported while partitioning a mesh into fragments.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// At least one seed is needed to create a fragment.
    #[error("at least one seed is required to partition a mesh.")]
    EmptySeeds,
    /// A nearest-fragment lookup was attempted without any fragment.
    #[error("cannot find the nearest fragment of a point: there is no fragment.")]
    EmptyFragmentSet,
    /// The reference seed used for animation does not exist.
    #[error("the reference seed {reference} does not exist, there are only {num_seeds} seeds.")]
    InvalidReferenceSeed {
        /// The index of the requested reference seed.
        reference: usize,
        /// The number of seeds available.
        num_seeds: usize,
    },
    /// The mesh buffers are inconsistent.
    #[error("invalid mesh buffers: {0}")]
    Mesh(#[from] MeshBuffersError),
}
