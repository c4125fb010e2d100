use super::{
    BoundaryClassifier, FaceOutcome, FaceSplitter, Fragment, FragmentId, NearestSeedIndex,
    PartitionError, StraddleKind, VertexAssignment, DEFAULT_BOUNDARY_TOLERANCE,
};
use crate::math::{Point, Real};
use crate::motion::{FragmentAnimator, KeyframeTimeline, LinearOffset, OffsetPolicy, ShardMotion};
use crate::shape::MeshBuffers;
use std::ops::Range;

/// How vertex normals are obtained before partitioning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum NormalsMode {
    /// Always recompute smooth vertex normals from the triangles.
    #[default]
    Regenerate,
    /// Keep the normals of the input mesh, and only generate them if it has none.
    GenerateIfMissing,
}

/// Parameters of the partition of a mesh into fragments.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PartitionOptions {
    /// Maximum difference of squared distances for a vertex to be considered on the boundary
    /// between two fragments.
    ///
    /// default: 1.0e-4
    pub boundary_tolerance: Real,
    /// Index of the seed whose fragment the animation originates from.
    ///
    /// default: 0
    pub reference_seed: usize,
    /// How vertex normals are obtained.
    ///
    /// default: `NormalsMode::Regenerate`
    pub normals: NormalsMode,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            reference_seed: 0,
            normals: NormalsMode::Regenerate,
        }
    }
}

/// Counters gathered while partitioning a mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PartitionStats {
    /// Original triangles added unchanged to a single fragment.
    pub kept_faces: usize,
    /// Original triangles replaced by three sub-triangles.
    pub split_faces: usize,
    /// Among the split and unresolved triangles, those with three distinct fragments.
    pub three_way_faces: usize,
    /// Original triangles for which no sub-triangle could be emitted.
    pub unresolved_faces: usize,
    /// Boundary vertices appended to the mesh.
    pub inserted_vertices: usize,
}

/// Shatters meshes into one fragment per seed point.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use shatter3d::math::{Point, Vector};
/// use shatter3d::motion::OutSlowDown;
/// use shatter3d::partitioning::{PartitionBuilder, PartitionOptions};
/// use shatter3d::transformation::cuboid;
///
/// let seeds = [Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
/// let shattered = PartitionBuilder::new()
///     .with_options(PartitionOptions {
///         reference_seed: 1,
///         ..PartitionOptions::default()
///     })
///     .with_offset_policy(OutSlowDown)
///     .build(cuboid(Vector::repeat(1.0)), &seeds)
///     .unwrap();
///
/// assert_eq!(shattered.fragments().len(), 2);
/// assert_eq!(shattered.stats().unresolved_faces, 0);
/// # }
/// ```
pub struct PartitionBuilder {
    options: PartitionOptions,
    offset_policy: Box<dyn OffsetPolicy>,
    timeline: KeyframeTimeline,
}

impl Default for PartitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionBuilder {
    /// A builder with default options, a [`LinearOffset`] policy, and the
    /// [`KeyframeTimeline::rotate_and_return`] timeline.
    pub fn new() -> Self {
        Self {
            options: PartitionOptions::default(),
            offset_policy: Box::new(LinearOffset::default()),
            timeline: KeyframeTimeline::default(),
        }
    }

    /// Sets the partition parameters.
    pub fn with_options(mut self, options: PartitionOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets how the phase offset of each fragment is derived from its distance to the
    /// reference seed.
    pub fn with_offset_policy(mut self, policy: impl OffsetPolicy + 'static) -> Self {
        self.offset_policy = Box::new(policy);
        self
    }

    /// Sets the animation shared by all the fragments.
    pub fn with_timeline(mut self, timeline: KeyframeTimeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// The partition parameters.
    #[inline]
    pub fn options(&self) -> &PartitionOptions {
        &self.options
    }

    /// Partitions `mesh` into one fragment per seed.
    ///
    /// Every vertex is assigned to the fragment of its nearest seed. Triangles whose vertices
    /// belong to different fragments are split along the bisecting plane of the two seeds
    /// involved, which appends boundary vertices to the mesh. The triangles of each fragment
    /// are then stored contiguously in the index buffer of the returned mesh.
    pub fn build(
        &self,
        mut mesh: MeshBuffers,
        seeds: &[Point<Real>],
    ) -> Result<ShatterPartition, PartitionError> {
        if seeds.is_empty() {
            log::error!("Cannot shatter a mesh without any seed.");
            return Err(PartitionError::EmptySeeds);
        }

        if self.options.reference_seed >= seeds.len() {
            return Err(PartitionError::InvalidReferenceSeed {
                reference: self.options.reference_seed,
                num_seeds: seeds.len(),
            });
        }

        match self.options.normals {
            NormalsMode::Regenerate => mesh.generate_normals(),
            NormalsMode::GenerateIfMissing if mesh.normals().is_none() => mesh.generate_normals(),
            NormalsMode::GenerateIfMissing => {}
        }

        let index = NearestSeedIndex::new(seeds.to_vec());
        let mut fragments: Vec<_> = seeds.iter().map(|seed| Fragment::new(*seed)).collect();
        let assignment = assign_vertices(&mesh, &index, &mut fragments)?;

        let original_faces = mesh.indices().to_vec();
        let num_original_vertices = mesh.num_vertices();
        let mut partition = ShatterPartition {
            mesh,
            fragments,
            assignment,
            timeline: self.timeline.clone(),
            reference: FragmentId(self.options.reference_seed as u32),
            unresolved_faces: vec![],
            stats: PartitionStats::default(),
        };

        partition.split_faces(
            &original_faces,
            &index,
            BoundaryClassifier::new(self.options.boundary_tolerance),
        )?;
        partition.stats.inserted_vertices = partition.mesh.num_vertices() - num_original_vertices;
        partition.compact_faces();

        FragmentAnimator::new(partition.reference, &*self.offset_policy)
            .finalize(&mut partition.fragments);

        log::debug!(
            "Shattered {} triangles into {} fragments: {:?}.",
            original_faces.len(),
            partition.fragments.len(),
            partition.stats
        );

        Ok(partition)
    }
}

/// Assigns each vertex to its nearest fragment and sums the vertex normals of each fragment.
fn assign_vertices(
    mesh: &MeshBuffers,
    index: &NearestSeedIndex,
    fragments: &mut [Fragment],
) -> Result<VertexAssignment, PartitionError> {
    let mut assignment = VertexAssignment::with_capacity(mesh.num_vertices());

    for (i, pt) in mesh.positions().iter().enumerate() {
        let nearest = index.nearest(pt)?;
        fragments[nearest.index()].accumulate_normal(&mesh.normal(i as u32));
        assignment.push(nearest);
    }

    Ok(assignment)
}

/// A mesh shattered into fragments, ready to be rendered one draw call per fragment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ShatterPartition {
    mesh: MeshBuffers,
    fragments: Vec<Fragment>,
    assignment: VertexAssignment,
    timeline: KeyframeTimeline,
    reference: FragmentId,
    unresolved_faces: Vec<[u32; 3]>,
    stats: PartitionStats,
}

impl ShatterPartition {
    fn split_faces(
        &mut self,
        faces: &[[u32; 3]],
        index: &NearestSeedIndex,
        classifier: BoundaryClassifier,
    ) -> Result<(), PartitionError> {
        let mut splitter = FaceSplitter::new(
            &mut self.mesh,
            &mut self.fragments,
            &mut self.assignment,
            index,
            classifier,
        );

        for face in faces {
            match splitter.check_face(*face)? {
                FaceOutcome::Kept(_) => self.stats.kept_faces += 1,
                FaceOutcome::Split(split) => {
                    self.stats.split_faces += 1;
                    if split.kind == StraddleKind::ThreeWay {
                        self.stats.three_way_faces += 1;
                    }
                }
                FaceOutcome::Unresolved(split) => {
                    self.stats.unresolved_faces += 1;
                    if split.kind == StraddleKind::ThreeWay {
                        self.stats.three_way_faces += 1;
                    }
                    self.unresolved_faces.push(*face);
                }
            }
        }

        Ok(())
    }

    /// Concatenates the triangles of every fragment into the mesh index buffer.
    fn compact_faces(&mut self) {
        let mut indices = Vec::with_capacity(self.fragments.iter().map(|f| f.faces.len()).sum());

        for fragment in &mut self.fragments {
            fragment.face_offset = indices.len();
            indices.extend_from_slice(&fragment.faces);
        }

        self.mesh.set_indices(indices);
    }

    /// The shattered mesh.
    ///
    /// Its vertex buffers contain the original vertices followed by the boundary vertices, and
    /// its index buffer contains the triangles of each fragment, one fragment after the other.
    #[inline]
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Retrieves the shattered mesh, dropping the fragments.
    pub fn into_mesh(self) -> MeshBuffers {
        self.mesh
    }

    /// The fragments, in the same order as the seeds they were built from.
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The fragment `id`.
    #[inline]
    pub fn fragment(&self, id: FragmentId) -> &Fragment {
        &self.fragments[id.index()]
    }

    /// Iterates through all the fragments and their identifiers.
    pub fn fragments_with_ids(&self) -> impl ExactSizeIterator<Item = (FragmentId, &Fragment)> {
        self.fragments
            .iter()
            .enumerate()
            .map(|(i, f)| (FragmentId(i as u32), f))
    }

    /// The fragment owning each vertex of the shattered mesh.
    #[inline]
    pub fn assignment(&self) -> &VertexAssignment {
        &self.assignment
    }

    /// The animation shared by all the fragments.
    #[inline]
    pub fn timeline(&self) -> &KeyframeTimeline {
        &self.timeline
    }

    /// The fragment the animation originates from.
    #[inline]
    pub fn reference(&self) -> FragmentId {
        self.reference
    }

    /// The original triangles that straddled a boundary but could not be split.
    ///
    /// None of their sub-triangles appear in the index buffer.
    #[inline]
    pub fn unresolved_faces(&self) -> &[[u32; 3]] {
        &self.unresolved_faces
    }

    /// The counters gathered during the partition.
    #[inline]
    pub fn stats(&self) -> &PartitionStats {
        &self.stats
    }

    /// The range of triangles of the fragment `id` in the index buffer of [`Self::mesh`].
    #[inline]
    pub fn fragment_range(&self, id: FragmentId) -> Range<usize> {
        self.fragment(id).face_range()
    }

    /// The triangles of the fragment `id`, as stored in the index buffer of [`Self::mesh`].
    #[inline]
    pub fn fragment_indices(&self, id: FragmentId) -> &[[u32; 3]] {
        &self.mesh.indices()[self.fragment_range(id)]
    }

    /// The animated motion of the fragment `id`.
    pub fn motion(&self, id: FragmentId) -> ShardMotion<'_> {
        ShardMotion::from_fragment(&self.timeline, self.fragment(id))
    }
}
