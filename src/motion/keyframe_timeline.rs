use crate::math::{Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON};
use na::RealField;

/// A rotation angle sampled at a given time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Keyframe {
    /// The time of this sample.
    pub time: Real,
    /// The rotation angle, in radians, at `self.time`.
    pub angle: Real,
}

/// A piecewise-linear rotation angle over time, defined by keyframes sorted by time.
///
/// A timeline always contains at least one keyframe.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use shatter3d::motion::KeyframeTimeline;
///
/// let mut timeline = KeyframeTimeline::new(0.0, 0.0);
/// timeline.insert(2.0, 1.0);
///
/// assert_eq!(timeline.angle_at(1.0), 0.5);
/// assert_eq!(timeline.angle_at(5.0), 1.0);
/// assert_eq!(timeline.total_time(), 2.0);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct KeyframeTimeline {
    keyframes: Vec<Keyframe>,
}

impl Default for KeyframeTimeline {
    fn default() -> Self {
        Self::rotate_and_return()
    }
}

impl KeyframeTimeline {
    /// A timeline with a single keyframe.
    pub fn new(time: Real, angle: Real) -> Self {
        Self {
            keyframes: vec![Keyframe { time, angle }],
        }
    }

    /// A timeline with the given keyframes, in any order.
    ///
    /// Returns `None` if `keyframes` is empty.
    pub fn from_keyframes(keyframes: impl IntoIterator<Item = Keyframe>) -> Option<Self> {
        let mut keyframes = keyframes.into_iter();
        let first = keyframes.next()?;
        let mut result = Self::new(first.time, first.angle);

        for keyframe in keyframes {
            result.insert(keyframe.time, keyframe.angle);
        }

        Some(result)
    }

    /// The default fragment animation: rotate by a quarter turn in one time unit, hold it,
    /// rotate back, then rest until the end of the 20 time units loop.
    pub fn rotate_and_return() -> Self {
        let quarter_turn = Real::frac_pi_2();
        let mut result = Self::new(0.0, 0.0);
        result.insert(1.0, quarter_turn);
        result.insert(10.0, quarter_turn);
        result.insert(11.0, 0.0);
        result.insert(20.0, 0.0);
        result
    }

    /// Adds a keyframe, keeping the keyframes sorted by time.
    ///
    /// A keyframe inserted at the same time as existing ones is placed after them.
    pub fn insert(&mut self, time: Real, angle: Real) {
        let i = self
            .keyframes
            .iter()
            .position(|k| time < k.time)
            .unwrap_or(self.keyframes.len());
        self.keyframes.insert(i, Keyframe { time, angle });
    }

    /// The keyframes, sorted by time.
    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// The time of the last keyframe.
    #[inline]
    pub fn total_time(&self) -> Real {
        self.last().time
    }

    /// The rotation angle at the given time.
    ///
    /// Before the first keyframe this is the angle of the first keyframe, after the last one
    /// it is the angle of the last keyframe, and in-between it is linearly interpolated from the
    /// two surrounding keyframes.
    pub fn angle_at(&self, time: Real) -> Real {
        let first = self.keyframes[0];
        if time <= first.time {
            return first.angle;
        }

        for pair in self.keyframes.windows(2) {
            let (k0, k1) = (pair[0], pair[1]);

            if time == k1.time {
                return k1.angle;
            }

            if k0.time < time && time < k1.time {
                let lerp = (time - k0.time) / (k1.time - k0.time);
                return (1.0 - lerp) * k0.angle + lerp * k1.angle;
            }
        }

        self.last().angle
    }

    /// The rotation by `self.angle_at(time)` around `axis`.
    ///
    /// Returns the identity if `axis` is too small to be normalized.
    pub fn evaluate(&self, time: Real, axis: &Vector<Real>) -> Rotation<Real> {
        match UnitVector::try_new(*axis, DEFAULT_EPSILON) {
            Some(axis) => Rotation::from_axis_angle(&axis, self.angle_at(time)),
            None => Rotation::identity(),
        }
    }

    fn last(&self) -> &Keyframe {
        &self.keyframes[self.keyframes.len() - 1]
    }
}

#[cfg(test)]
mod test {
    use super::{Keyframe, KeyframeTimeline};
    use crate::math::{Real, Rotation, Vector};
    use na::RealField;

    #[test]
    fn insertion_keeps_keyframes_sorted() {
        let mut timeline = KeyframeTimeline::new(5.0, 0.5);
        timeline.insert(1.0, 0.1);
        timeline.insert(3.0, 0.3);
        timeline.insert(5.0, 0.6);
        timeline.insert(7.0, 0.7);

        let times: Vec<_> = timeline.keyframes().iter().map(|k| (k.time, k.angle)).collect();
        assert_eq!(
            times,
            vec![(1.0, 0.1), (3.0, 0.3), (5.0, 0.5), (5.0, 0.6), (7.0, 0.7)]
        );
    }

    #[test]
    fn from_keyframes_requires_one_keyframe() {
        assert!(KeyframeTimeline::from_keyframes([]).is_none());

        let timeline = KeyframeTimeline::from_keyframes([
            Keyframe { time: 2.0, angle: 1.0 },
            Keyframe { time: 0.0, angle: 0.0 },
        ])
        .unwrap();
        assert_eq!(timeline.total_time(), 2.0);
        assert_eq!(timeline.keyframes()[0].time, 0.0);
    }

    #[test]
    fn rotate_and_return_profile() {
        let timeline = KeyframeTimeline::rotate_and_return();
        let quarter_turn = Real::frac_pi_2();

        assert_eq!(timeline.total_time(), 20.0);
        assert_eq!(timeline.angle_at(-3.0), 0.0);
        assert_eq!(timeline.angle_at(0.0), 0.0);
        assert_relative_eq!(timeline.angle_at(0.5), quarter_turn / 2.0);
        assert_eq!(timeline.angle_at(1.0), quarter_turn);
        assert_relative_eq!(timeline.angle_at(5.0), quarter_turn);
        assert_eq!(timeline.angle_at(10.0), quarter_turn);
        assert_relative_eq!(timeline.angle_at(10.25), quarter_turn * 0.75);
        assert_eq!(timeline.angle_at(15.0), 0.0);
        assert_eq!(timeline.angle_at(20.0), 0.0);
        assert_eq!(timeline.angle_at(42.0), 0.0);
    }

    #[test]
    fn evaluate_rotates_around_the_axis() {
        let timeline = KeyframeTimeline::rotate_and_return();
        let rot = timeline.evaluate(5.0, &(Vector::y() * 3.0));

        assert_relative_eq!(rot * Vector::x(), -Vector::z(), epsilon = 1.0e-6);
        assert_eq!(timeline.evaluate(5.0, &Vector::zeros()), Rotation::identity());
    }
}
