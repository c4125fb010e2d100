use super::FragmentId;

/// The fragment currently owning each vertex of a mesh.
///
/// It grows together with the position buffer: every vertex appended to the mesh gets
/// its entry here before any face refers to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VertexAssignment {
    fragments: Vec<FragmentId>,
}

impl VertexAssignment {
    /// An empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty assignment able to hold `capacity` vertices without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fragments: Vec::with_capacity(capacity),
        }
    }

    /// Assigns the next vertex to `fragment`.
    #[inline]
    pub fn push(&mut self, fragment: FragmentId) {
        self.fragments.push(fragment);
    }

    /// The fragment owning the vertex `vertex`.
    #[inline]
    pub fn get(&self, vertex: u32) -> FragmentId {
        self.fragments[vertex as usize]
    }

    /// The number of assigned vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Is no vertex assigned yet?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The owning fragment of every vertex, indexed by vertex.
    #[inline]
    pub fn as_slice(&self) -> &[FragmentId] {
        &self.fragments
    }
}
