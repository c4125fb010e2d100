use crate::math::{Point, Real};
use na;

/// The default tolerance, in squared-distance units, of [`BoundaryClassifier`].
pub const DEFAULT_BOUNDARY_TOLERANCE: Real = 1.0e-4;

/// Decides whether a point sits on the boundary between two fragments.
///
/// A point is near the boundary of a candidate fragment when its squared distances to the
/// candidate's seed and to the seed of the fragment it is assigned to differ by less
/// than `tolerance`. A point is always near the boundary of its own fragment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundaryClassifier {
    /// The maximum difference of squared distances for two seeds to be considered tied.
    pub tolerance: Real,
}

impl Default for BoundaryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY_TOLERANCE)
    }
}

impl BoundaryClassifier {
    /// A classifier with the given squared-distance tolerance.
    pub fn new(tolerance: Real) -> Self {
        Self { tolerance }
    }

    /// Is `pt`, assigned to the fragment seeded at `assigned_seed`, tied within tolerance
    /// with the fragment seeded at `candidate_seed`?
    #[inline]
    pub fn is_near_boundary(
        &self,
        pt: &Point<Real>,
        assigned_seed: &Point<Real>,
        candidate_seed: &Point<Real>,
    ) -> bool {
        let to_candidate = na::distance_squared(pt, candidate_seed);
        let to_assigned = na::distance_squared(pt, assigned_seed);
        (to_candidate - to_assigned).abs() < self.tolerance
    }
}
