use crate::math::{Point, Real, Vector};
use std::collections::BTreeSet;
use std::ops::Range;

/// The index of a fragment in the fragment table of a partition.
///
/// Fragments are created once, one per seed and in the order of the seeds, so this
/// index stays valid for the whole lifetime of the partition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FragmentId(pub u32);

impl FragmentId {
    /// The position of this fragment in the fragment table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece of a shattered mesh, owned by a single seed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Fragment {
    /// The seed point defining the region of influence of this fragment.
    pub seed: Point<Real>,
    /// The triangles of this fragment.
    pub faces: Vec<[u32; 3]>,
    /// The index, counted in triangles, of the first triangle of this fragment in the
    /// compacted index buffer.
    pub face_offset: usize,
    /// The fragments sharing a boundary with this one.
    pub adjacencies: BTreeSet<FragmentId>,
    /// The normalized sum of the normals of the vertices nearest to this fragment's seed.
    pub normal: Vector<Real>,
    /// The direction toward the reference fragment.
    ///
    /// For the reference fragment itself, this is the sum of the directions from every seed
    /// toward the reference seed.
    pub bias: Vector<Real>,
    /// The axis this fragment rotates around when animated.
    pub rotation_axis: Vector<Real>,
    /// The time shift applied to the shared animation timeline for this fragment.
    pub phase_offset: Real,
}

impl Fragment {
    /// Creates an empty fragment for the given seed.
    pub fn new(seed: Point<Real>) -> Self {
        Self {
            seed,
            faces: vec![],
            face_offset: 0,
            adjacencies: BTreeSet::new(),
            normal: Vector::zeros(),
            bias: Vector::zeros(),
            rotation_axis: Vector::zeros(),
            phase_offset: 0.0,
        }
    }

    /// The range of this fragment's triangles in the compacted index buffer.
    #[inline]
    pub fn face_range(&self) -> Range<usize> {
        self.face_offset..self.face_offset + self.faces.len()
    }

    /// The range of this fragment's indices in the flat index buffer, suitable for a draw call.
    #[inline]
    pub fn index_range(&self) -> Range<usize> {
        self.face_offset * 3..(self.face_offset + self.faces.len()) * 3
    }

    /// Is `other` sharing a boundary with this fragment?
    #[inline]
    pub fn is_adjacent_to(&self, other: FragmentId) -> bool {
        self.adjacencies.contains(&other)
    }

    /// Adds the normal of a vertex nearest to this fragment's seed.
    #[inline]
    pub fn accumulate_normal(&mut self, normal: &Vector<Real>) {
        self.normal += normal;
    }
}

/// Records `a` and `b` as adjacent to each other.
pub(crate) fn connect(fragments: &mut [Fragment], a: FragmentId, b: FragmentId) {
    if a != b {
        let _ = fragments[a.index()].adjacencies.insert(b);
        let _ = fragments[b.index()].adjacencies.insert(a);
    }
}
