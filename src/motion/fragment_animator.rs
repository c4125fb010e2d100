use crate::math::{Real, Vector};
use crate::partitioning::{Fragment, FragmentId};
use crate::utils::normalize_or_zero;
use na::ComplexField;

/// Maps the squared distance between a fragment's seed and the reference seed to the
/// phase offset of that fragment's animation.
///
/// Any `Fn(Real) -> Real` closure is an offset policy.
pub trait OffsetPolicy {
    /// The phase offset of a fragment whose seed is at `squared_distance` from the reference seed.
    fn offset(&self, squared_distance: Real) -> Real;
}

impl<F: Fn(Real) -> Real> OffsetPolicy for F {
    fn offset(&self, squared_distance: Real) -> Real {
        self(squared_distance)
    }
}

/// A phase offset proportional to the squared distance to the reference seed.
///
/// With the default scale of 5, fragments further from the reference run ahead.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LinearOffset {
    /// The factor applied to the squared distance.
    pub scale: Real,
}

impl Default for LinearOffset {
    fn default() -> Self {
        Self { scale: 5.0 }
    }
}

impl OffsetPolicy for LinearOffset {
    fn offset(&self, squared_distance: Real) -> Real {
        self.scale * squared_distance
    }
}

/// Motion radiating from the reference fragment and slowing down as it spreads: `-2·d²`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OutSlowDown;

impl OffsetPolicy for OutSlowDown {
    fn offset(&self, squared_distance: Real) -> Real {
        -2.0 * squared_distance * squared_distance
    }
}

/// Motion converging toward the reference fragment and speeding up as it gets closer: `5·d²`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct InSpeedUp;

impl OffsetPolicy for InSpeedUp {
    fn offset(&self, squared_distance: Real) -> Real {
        5.0 * squared_distance * squared_distance
    }
}

/// Motion radiating from the reference fragment and speeding up as it spreads: `-2·d^(1/4)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OutSpeedUp;

impl OffsetPolicy for OutSpeedUp {
    fn offset(&self, squared_distance: Real) -> Real {
        -2.0 * ComplexField::sqrt(ComplexField::sqrt(squared_distance))
    }
}

/// Computes the animation parameters of every fragment once the mesh is partitioned.
///
/// Each fragment rotates around the cross product of its bias vector (pointing toward the
/// reference fragment) and its aggregate normal, shifted in time by the offset policy.
pub struct FragmentAnimator<'a> {
    reference: FragmentId,
    policy: &'a dyn OffsetPolicy,
}

impl<'a> FragmentAnimator<'a> {
    /// An animator using the fragment `reference` as the origin of the motion.
    pub fn new(reference: FragmentId, policy: &'a dyn OffsetPolicy) -> Self {
        Self { reference, policy }
    }

    /// The fragment the motion originates from.
    #[inline]
    pub fn reference(&self) -> FragmentId {
        self.reference
    }

    /// The bias vector of each seed.
    ///
    /// This is `reference - seed` for every seed except the reference itself, which gets the
    /// sum of all these vectors so it leans away from the other fragments.
    pub fn bias_vectors(&self, fragments: &[Fragment]) -> Vec<Vector<Real>> {
        let reference_seed = fragments[self.reference.index()].seed;
        let mut result: Vec<_> = fragments.iter().map(|f| reference_seed - f.seed).collect();
        result[self.reference.index()] = result.iter().sum();
        result
    }

    /// Normalizes the aggregate normals, then sets the bias vector, rotation axis and phase
    /// offset of every fragment.
    ///
    /// Fragments that received no vertex keep a zero normal and therefore a zero rotation axis.
    pub fn finalize(&self, fragments: &mut [Fragment]) {
        let biases = self.bias_vectors(fragments);
        let reference_seed = fragments[self.reference.index()].seed;

        for (fragment, bias) in fragments.iter_mut().zip(biases) {
            fragment.normal = normalize_or_zero(&fragment.normal);
            fragment.bias = bias;
            fragment.rotation_axis = bias.cross(&fragment.normal);
            fragment.phase_offset = self
                .policy
                .offset(na::distance_squared(&fragment.seed, &reference_seed));
        }
    }
}
