use super::{FragmentId, PartitionError};
use crate::math::{Point, Real};
use na;

/// Finds the fragment whose seed is the closest to a point.
///
/// This is a linear scan over squared distances. When several seeds are equally close,
/// the one inserted first wins.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NearestSeedIndex {
    seeds: Vec<Point<Real>>,
}

impl NearestSeedIndex {
    /// Builds the index of the given seeds. The `i`-th seed belongs to `FragmentId(i)`.
    pub fn new(seeds: Vec<Point<Real>>) -> Self {
        Self { seeds }
    }

    /// The fragment with the seed closest to `pt`.
    ///
    /// Fails with [`PartitionError::EmptyFragmentSet`] if this index contains no seed.
    pub fn nearest(&self, pt: &Point<Real>) -> Result<FragmentId, PartitionError> {
        let mut best: Option<(usize, Real)> = None;

        for (i, seed) in self.seeds.iter().enumerate() {
            let dist = na::distance_squared(pt, seed);
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((i, dist));
            }
        }

        best.map(|(i, _)| FragmentId(i as u32)).ok_or_else(|| {
            log::error!("Cannot find the nearest fragment of {pt}: the fragment set is empty.");
            PartitionError::EmptyFragmentSet
        })
    }

    /// The seed of the fragment `id`.
    #[inline]
    pub fn seed(&self, id: FragmentId) -> &Point<Real> {
        &self.seeds[id.index()]
    }

    /// All the seeds, indexed by fragment.
    #[inline]
    pub fn seeds(&self) -> &[Point<Real>] {
        &self.seeds
    }

    /// The number of seeds.
    #[inline]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Does this index contain no seed?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
