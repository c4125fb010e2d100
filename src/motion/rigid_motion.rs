use super::KeyframeTimeline;
use crate::math::{HomogeneousMatrix, Isometry, Point, Real, Translation, Vector};
use crate::partitioning::Fragment;

/// A continuous rigid motion.
///
/// This is a function, assumed to be continuous, that, given a parameter `t` returns a direct isometry.
/// Mathematically speaking this is a one-parameter curve on the space of direct isometries.
pub trait RigidMotion {
    /// Get a position at the time `t`.
    fn position_at_time(&self, t: Real) -> Isometry<Real>;

    /// The position at the time `t`, as a 4x4 homogeneous matrix.
    fn homogeneous_at_time(&self, t: Real) -> HomogeneousMatrix<Real> {
        self.position_at_time(t).to_homogeneous()
    }
}

impl RigidMotion for Isometry<Real> {
    fn position_at_time(&self, _: Real) -> Isometry<Real> {
        *self
    }
}

/// The looping rotation of a single fragment around its seed.
///
/// The fragment is driven by a shared clock: at the clock time `t`, it is rotated around
/// `self.axis` by the timeline angle at `(t + self.phase_offset) mod total_time`, with
/// `self.pivot` as the center of rotation.
#[derive(Copy, Clone, Debug)]
pub struct ShardMotion<'a> {
    /// The rotation angle profile.
    pub timeline: &'a KeyframeTimeline,
    /// The point left fixed by the rotation.
    pub pivot: Point<Real>,
    /// The rotation axis. Its norm is ignored, and a zero axis gives no rotation.
    pub axis: Vector<Real>,
    /// The time shift applied to the clock before sampling the timeline.
    pub phase_offset: Real,
}

impl<'a> ShardMotion<'a> {
    /// Initialize the motion of a fragment rotating around `axis` about `pivot`.
    pub fn new(
        timeline: &'a KeyframeTimeline,
        pivot: Point<Real>,
        axis: Vector<Real>,
        phase_offset: Real,
    ) -> Self {
        ShardMotion {
            timeline,
            pivot,
            axis,
            phase_offset,
        }
    }

    /// The motion of `fragment`, using its seed as pivot and its precomputed axis and offset.
    pub fn from_fragment(timeline: &'a KeyframeTimeline, fragment: &Fragment) -> Self {
        Self::new(
            timeline,
            fragment.seed,
            fragment.rotation_axis,
            fragment.phase_offset,
        )
    }

    /// The timeline time sampled at the clock time `t`.
    ///
    /// This is `(t + self.phase_offset) mod total_time` where the remainder takes the sign of
    /// the dividend, so negative phases sample before the first keyframe. No modulo is applied
    /// if the timeline has a zero duration.
    pub fn local_time(&self, t: Real) -> Real {
        let total = self.timeline.total_time();
        let shifted = t + self.phase_offset;

        if relative_eq!(total, 0.0) {
            shifted
        } else {
            shifted % total
        }
    }

    /// The rotation angle at the clock time `t`.
    pub fn angle_at_time(&self, t: Real) -> Real {
        self.timeline.angle_at(self.local_time(t))
    }
}

impl<'a> RigidMotion for ShardMotion<'a> {
    fn position_at_time(&self, t: Real) -> Isometry<Real> {
        let rotation = self.timeline.evaluate(self.local_time(t), &self.axis);
        let to_pivot = Translation::from(self.pivot.coords);
        let from_pivot = Translation::from(-self.pivot.coords);

        to_pivot * rotation * from_pivot
    }
}
