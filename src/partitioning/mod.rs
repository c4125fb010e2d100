//! Partitioning of a triangle mesh into one fragment per seed point.

pub use self::boundary_classifier::{BoundaryClassifier, DEFAULT_BOUNDARY_TOLERANCE};
pub use self::error::PartitionError;
pub use self::face_splitter::{
    bisecting_plane_parameter, BoundarySplit, FaceClassification, FaceOutcome, FaceSplitter,
    Straddle, StraddleKind,
};
pub use self::fragment::{Fragment, FragmentId};
pub use self::nearest_seed::NearestSeedIndex;
pub use self::partition_builder::{
    NormalsMode, PartitionBuilder, PartitionOptions, PartitionStats, ShatterPartition,
};
pub use self::seed_placement::JitteredGrid;
pub use self::vertex_assignment::VertexAssignment;

mod boundary_classifier;
mod error;
mod face_splitter;
mod fragment;
mod nearest_seed;
mod partition_builder;
mod seed_placement;
mod vertex_assignment;
